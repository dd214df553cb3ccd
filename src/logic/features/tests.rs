//! Integration tests for the feature preparation pipeline
//!
//! The assembler's only real failure mode is silent: a skipped or reordered
//! column still produces a plausible-looking score. These tests pin the
//! column order, the vector width, and determinism against fixture encoders.

#[cfg(test)]
mod integration_tests {
    use crate::logic::artifacts::{FeatureScaler, GenderEncoder, GeographyEncoder};
    use crate::logic::features::{
        assemble, raw_features, CustomerProfile, FeatureLayout, PrepError, BASE_FEATURE_COUNT,
    };

    fn gender() -> GenderEncoder {
        GenderEncoder::new(vec!["Female".into(), "Male".into()])
    }

    fn geography() -> GeographyEncoder {
        GeographyEncoder::new(vec!["France".into(), "Germany".into(), "Spain".into()])
    }

    fn identity_scaler(width: usize) -> FeatureScaler {
        FeatureScaler::new(vec![0.0; width], vec![1.0; width])
    }

    fn profile() -> CustomerProfile {
        CustomerProfile {
            geography: "France".to_string(),
            gender: "Female".to_string(),
            age: 45,
            credit_score: 650,
            balance: 50_000.0,
            tenure: 5,
            num_products: 2,
            has_credit_card: true,
            is_active_member: true,
            estimated_salary: 100_000.0,
        }
    }

    #[test]
    fn test_vector_width_is_base_plus_geographies() {
        let layout = FeatureLayout::with_geography(geography().categories());
        let vector = assemble(
            &profile(),
            &gender(),
            &geography(),
            &identity_scaler(layout.len()),
            &layout,
        )
        .unwrap();

        assert_eq!(vector.len(), BASE_FEATURE_COUNT + 3);
    }

    #[test]
    fn test_raw_column_order() {
        let raw = raw_features(&profile(), &gender(), &geography()).unwrap();

        assert_eq!(raw[0], 650.0); // credit score first
        assert_eq!(raw[1], 0.0); // Female -> trained code 0
        assert_eq!(raw[2], 45.0); // age
        assert_eq!(raw[3], 5.0); // tenure
        assert_eq!(raw[4], 50_000.0); // balance
        assert_eq!(raw[5], 2.0); // products
        assert_eq!(raw[6], 1.0); // has credit card
        assert_eq!(raw[7], 1.0); // active member
        assert_eq!(raw[8], 100_000.0); // salary

        // geography block: exactly one 1, at the France position
        let geo_block = &raw[BASE_FEATURE_COUNT..];
        assert_eq!(geo_block, &[1.0, 0.0, 0.0]);
        assert_eq!(geo_block.iter().filter(|&&v| v == 1.0).count(), 1);
    }

    #[test]
    fn test_geography_position_follows_trained_order() {
        let mut p = profile();
        p.geography = "Spain".to_string();
        let raw = raw_features(&p, &gender(), &geography()).unwrap();
        assert_eq!(&raw[BASE_FEATURE_COUNT..], &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let layout = FeatureLayout::with_geography(geography().categories());
        let scaler = FeatureScaler::new(
            (0..layout.len()).map(|i| i as f32).collect(),
            vec![2.0; layout.len()],
        );

        let a = assemble(&profile(), &gender(), &geography(), &scaler, &layout).unwrap();
        let b = assemble(&profile(), &gender(), &geography(), &scaler, &layout).unwrap();

        // Bit-identical, not just approximately equal
        assert_eq!(a, b);
    }

    #[test]
    fn test_scaler_applied_per_column() {
        let layout = FeatureLayout::with_geography(geography().categories());
        let mut mean = vec![0.0; layout.len()];
        let mut scale = vec![1.0; layout.len()];
        mean[0] = 600.0;
        scale[0] = 100.0;
        mean[2] = 40.0;
        scale[2] = 10.0;
        let scaler = FeatureScaler::new(mean, scale);

        let vector = assemble(&profile(), &gender(), &geography(), &scaler, &layout).unwrap();

        assert!((vector.get(0).unwrap() - 0.5).abs() < 1e-6); // (650-600)/100
        assert!((vector.get(2).unwrap() - 0.5).abs() < 1e-6); // (45-40)/10
        assert_eq!(vector.get_by_name(&layout, "geography_France"), Some(1.0));
    }

    #[test]
    fn test_unknown_geography_fails() {
        let err = raw_features(
            &CustomerProfile {
                geography: "Atlantis".to_string(),
                ..profile()
            },
            &gender(),
            &geography(),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            PrepError::UnknownCategory {
                field: "geography",
                ..
            }
        ));
    }

    #[test]
    fn test_scaler_width_mismatch_fails() {
        let layout = FeatureLayout::with_geography(geography().categories());
        let err = assemble(
            &profile(),
            &gender(),
            &geography(),
            &identity_scaler(layout.len() - 1),
            &layout,
        )
        .unwrap_err();

        assert!(matches!(err, PrepError::ShapeMismatch { .. }));
    }
}
