use crate::huffman::frequency::FrequencyBucket;

const CONFIGURATION_FILE: &str = "log4rs.yaml";

#[ctor::ctor]
fn init() {
    if let Err(e) = log4rs::init_file(CONFIGURATION_FILE, Default::default()) {
        eprintln!(
            "Logging disabled, unable to load '{}': {}",
            CONFIGURATION_FILE, e
        );
    }
}

pub fn log_frequency_bucket(bucket: &FrequencyBucket) {
    if !log::log_enabled!(log::Level::Debug) {
        return;
    }
    for (frequency, symbols) in bucket.buckets() {
        let symbols: Vec<String> = symbols
            .iter()
            .map(|&symbol| format!("{:?}", symbol as char))
            .collect();
        log::debug!("frequency {}: {}", frequency, symbols.join(" "));
    }
}
