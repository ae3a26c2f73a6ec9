use order_triage::config::{OrderBatch, PipelineConfig};
use order_triage::lifecycle::{setup_tracing, OrderPipeline, PipelineError};
use order_triage::model::OrderCreate;
use tracing::{error, info};

fn demo_batch() -> OrderBatch {
    let order = |customer: &str, postal_code: &str, priorities: &[i64]| OrderCreate {
        customer: customer.to_string(),
        postal_code: postal_code.to_string(),
        priorities: priorities.to_vec(),
    };

    OrderBatch {
        config: PipelineConfig { zone_threshold: 50 },
        orders: vec![
            order("Ana", "X-080", &[3, 4, 6]),
            order("Bob", "X-080", &[9]),
            order("ANA", "Y-080", &[1]),
            order("Eugenio", "M-012", &[0, 3, 12]),
            order("Lucia", "M-095", &[6, 7]),
        ],
    }
}

fn main() -> Result<(), PipelineError> {
    setup_tracing();

    let batch = match std::env::args().nth(1) {
        Some(path) => OrderBatch::from_path(path)?,
        None => {
            info!("No batch file given, using the demo batch");
            demo_batch()
        }
    };

    let orders = batch.to_orders();
    let pipeline = OrderPipeline::new(batch.config);
    let report = pipeline.run(&orders)?;

    for (position, order) in report.sorted.iter().enumerate() {
        info!(position, %order, "Sorted");
    }
    for (depth, order) in report.exploded.iter().enumerate() {
        info!(depth, %order, "Exploded");
    }

    if let Err(e) = report.validate(&orders, pipeline.config().zone_threshold) {
        error!(error = %e, "Result validation failed");
        return Err(e.into());
    }

    info!(summary = %report.summary(), "Application completed successfully");
    Ok(())
}
