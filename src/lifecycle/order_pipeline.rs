use crate::config::{ConfigError, PipelineConfig};
use crate::model::{FormatError, Order, Urgency};
use crate::processor::{OrderProcessor, OrderStack, UrgencyGroups};
use crate::validation::{self, ValidationError};
use thiserror::Error;
use tracing::{debug, info, instrument};

/// Errors that can stop a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Result validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Runs every [`OrderProcessor`] operation over one batch of orders.
///
/// `OrderPipeline` is responsible for:
/// - **Filtering and sorting**: orders above the configured zone threshold,
///   sorted by zone then customer
/// - **Grouping and exploding**: all orders grouped by urgency, with the
///   dominant group unrolled onto a stack
///
/// # Example
///
/// ```ignore
/// let pipeline = OrderPipeline::new(PipelineConfig { zone_threshold: 50 });
/// let report = pipeline.run(&orders)?;
/// report.validate(&orders, pipeline.config().zone_threshold)?;
/// info!("{}", report.summary());
/// ```
#[derive(Debug, Clone, Default)]
pub struct OrderPipeline {
    processor: OrderProcessor,
    config: PipelineConfig,
}

/// Results of one [`OrderPipeline::run`], borrowing from the input orders.
#[derive(Debug, Clone)]
pub struct PipelineReport<'a> {
    /// Orders above the zone threshold, in input order.
    pub filtered: Vec<&'a Order>,
    /// `filtered` by zone descending then customer, ties collapsed.
    pub sorted: Vec<&'a Order>,
    /// All input orders grouped by urgency.
    pub groups: UrgencyGroups<'a>,
    /// Urgency of the largest group, if any.
    pub dominant_urgency: Option<Urgency>,
    /// The dominant group, last input order on top.
    pub exploded: OrderStack<'a>,
}

impl OrderPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            processor: OrderProcessor::new(),
            config,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Filters and sorts by zone, then groups and explodes by urgency.
    ///
    /// # Errors
    /// Aborts with [`PipelineError::Format`] on the first malformed postal code.
    #[instrument(skip(self, orders), fields(orders = orders.len(), threshold = self.config.zone_threshold))]
    pub fn run<'a>(&self, orders: &'a [Order]) -> Result<PipelineReport<'a>, PipelineError> {
        debug!(?orders, "run called");

        let filtered = self
            .processor
            .filter_by_zone_threshold(orders, self.config.zone_threshold)?;
        let sorted = self
            .processor
            .sort_by_zone_then_customer(filtered.iter().copied())?;

        let groups = self.processor.group_by_urgency(orders);
        let dominant_urgency = self.processor.dominant_urgency(&groups);
        let exploded = self.processor.explode_dominant_group(&groups);

        let report = PipelineReport {
            filtered,
            sorted,
            groups,
            dominant_urgency,
            exploded,
        };
        info!(summary = %report.summary(), "Pipeline finished");
        Ok(report)
    }
}

impl PipelineReport<'_> {
    /// One-line description of the report sizes.
    pub fn summary(&self) -> String {
        let dominant = self
            .dominant_urgency
            .map_or_else(|| "none".to_string(), |urgency| urgency.to_string());
        format!(
            "filtered={} sorted={} groups={} dominant_urgency={} exploded={}",
            self.filtered.len(),
            self.sorted.len(),
            self.groups.len(),
            dominant,
            self.exploded.len()
        )
    }

    /// Checks every result against an independent recomputation from `orders`.
    pub fn validate(&self, orders: &[Order], threshold: i64) -> Result<(), ValidationError> {
        validation::check_filtered(&self.filtered, orders, threshold)?;
        validation::check_sorted(&self.sorted, self.filtered.iter().copied())?;
        validation::check_grouped(&self.groups, orders)?;
        validation::check_exploded(&self.exploded, orders)?;
        Ok(())
    }
}
