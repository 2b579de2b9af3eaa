#![no_main]

use figvivo::vivo::{map_record, MappingConfig, RdfFormat, WorkKeyPolicy};
use figvivo::WorkRecord;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(record) = WorkRecord::from_json(text) else {
        return;
    };

    for policy in [WorkKeyPolicy::NormalizedDoi, WorkKeyPolicy::SourceId] {
        let config = MappingConfig::default()
            .with_work_key(policy)
            .with_aggregation(true);
        if let Some(fragment) = map_record(&record, &config) {
            // Minted URIs must always be serializable.
            fragment
                .graph
                .serialize(RdfFormat::NTriples)
                .expect("mapped fragment serializes");
        }
    }
});
