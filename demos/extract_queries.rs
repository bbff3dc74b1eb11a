use promql_selector_extract::extract;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let inputs = [
        "cpu_temperature{host=\"server1\"}",
        "{__name__=\"abc\", host=\"localhost\"} offset 5m",
        "sum by (job) (rate(http_requests_total{job=\"api\",code=~\"5..\"}[5m]))",
        "mongodb_up{job=\"mongo\"} + on(instance) mongodb_ss_connections{conn_type=\"current\"}",
        "broken{a=\"1\"",
    ];

    for input in inputs {
        println!("\nExtracting: {}", input);
        let records = extract(input);
        if records.is_empty() {
            println!("  no selectors");
        }
        for record in records {
            println!("  {}", record);
            tracing::debug!(?record, "extracted");
        }
    }
}
