//! Per-biome report lines for a single probed point.

use ecotope_terrain::{BiomeCatalog, BiomeCategory, Color, EnvironmentSample, RangeCheck};

/// Everything the probe reports about one catalog entry at one point.
#[derive(Clone, Debug, PartialEq)]
pub struct BiomeReport {
    pub name: String,
    pub category: BiomeCategory,
    pub score: f64,
    pub range: RangeCheck,
    pub color: Color,
}

impl std::fmt::Display for BiomeReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let range = match self.range.sentinel() {
            None => "in-range".to_string(),
            Some(sentinel) => format!("out-of-range ({sentinel})"),
        };
        write!(
            f,
            "{:<10} {:<10} score={:>9.5} {:<18} color={}",
            self.name,
            format!("{:?}", self.category),
            self.score,
            range,
            self.color
        )
    }
}

/// Builds one report per catalog entry, in catalog order.
pub fn build_reports(catalog: &BiomeCatalog, sample: &EnvironmentSample) -> Vec<BiomeReport> {
    catalog
        .iter()
        .map(|(_, biome)| BiomeReport {
            name: biome.name().to_string(),
            category: biome.category(),
            score: biome.matching_score(sample),
            range: biome.values_in_range(sample),
            color: biome.color_from_values(sample),
        })
        .collect()
}

/// One-line summary of the sampled signals.
pub fn describe_sample(sample: &EnvironmentSample) -> String {
    format!(
        "heat={:.5} moisture={:.5} ground_hardness={:.5} height={:.5}",
        sample.heat, sample.moisture, sample.ground_hardness, sample.height
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_report_per_biome_in_catalog_order() {
        let catalog = BiomeCatalog::standard();
        let sample = EnvironmentSample::new(0.5, 0.5, 0.5, 0.5);
        let reports = build_reports(&catalog, &sample);

        assert_eq!(reports.len(), catalog.len());
        for ((_, biome), report) in catalog.iter().zip(&reports) {
            assert_eq!(biome.name(), report.name);
            assert_eq!(biome.matching_score(&sample), report.score);
        }
    }

    #[test]
    fn test_report_line_format() {
        let report = BiomeReport {
            name: "desert".to_string(),
            category: BiomeCategory::Desert,
            score: 0.25,
            range: RangeCheck::OutOfRange,
            color: Color::rgb(220, 190, 80),
        };
        let line = report.to_string();
        assert!(line.starts_with("desert"));
        assert!(line.contains("score=  0.25000"));
        assert!(line.contains("out-of-range (-1)"));
        assert!(line.ends_with("color=#dcbe50"));
    }

    #[test]
    fn test_describe_sample() {
        let text = describe_sample(&EnvironmentSample::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(
            text,
            "heat=0.10000 moisture=0.20000 ground_hardness=0.30000 height=0.40000"
        );
    }
}
