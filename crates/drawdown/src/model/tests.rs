#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use crate::constants::WELL_RADIUS;
    use crate::model::calculations::*;
    use crate::model::inverse::*;
    use crate::model::types::{AquiferModel, DrawdownMode, HeadEstimate};

    fn assert_close(actual: f64, expected: f64, rel: f64) {
        let scale = expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= rel * scale,
            "expected {expected}, got {actual}"
        );
    }

    // -------------------------------------------------------------------------
    // Thiem (confined)
    // -------------------------------------------------------------------------

    #[test]
    fn test_thiem_zero_at_well_face() {
        let h = thiem_head(272.83, 8.0, 0.0, WELL_RADIUS, WELL_RADIUS);
        assert_eq!(h, 0.0);
    }

    #[test]
    fn test_thiem_default_scenario_at_boundary() {
        let h = thiem_head(272.83, 8.0, 0.0, WELL_RADIUS, 1000.0);
        let expected = -(272.83 / (2.0 * PI * 8.0)) * (1000.0_f64 / 0.15).ln();
        assert_close(h, expected, 1e-12);
        // Roughly 47.8 m below the reference head.
        assert!((h + 47.79).abs() < 0.01, "got {h}");
    }

    #[test]
    fn test_thiem_linear_in_discharge() {
        let model = AquiferModel::confined(12.5);
        for r in [0.5, 3.0, 42.0, 900.0] {
            let single = evaluate(&model, 100.0, 0.0, WELL_RADIUS, &[r]);
            let double = evaluate(&model, 200.0, 0.0, WELL_RADIUS, &[r]);
            assert_close(double[0], 2.0 * single[0], 1e-12);
        }
    }

    #[test]
    fn test_thiem_zero_transmissivity_sentinel() {
        let model = AquiferModel::confined(0.0);
        for (q, h2, r) in [(100.0, 5.0, 10.0), (0.0, -3.0, 0.2), (480.0, 0.0, 999.0)] {
            assert_eq!(evaluate(&model, q, h2, WELL_RADIUS, &[r]), vec![0.0]);
        }
        assert_eq!(
            try_thiem_head(100.0, 0.0, 5.0, WELL_RADIUS, 10.0),
            HeadEstimate::Undefined
        );
    }

    #[test]
    fn test_thiem_reference_head_offsets_curve() {
        let base = thiem_head(150.0, 20.0, 0.0, WELL_RADIUS, 75.0);
        let raised = thiem_head(150.0, 20.0, 12.0, WELL_RADIUS, 75.0);
        assert_close(raised - base, 12.0, 1e-12);
    }

    #[test]
    fn test_thiem_head_decreases_with_radius() {
        let radii = [1.0, 10.0, 100.0, 1000.0];
        let heads = evaluate(&AquiferModel::confined(8.0), 272.83, 0.0, WELL_RADIUS, &radii);
        for pair in heads.windows(2) {
            assert!(pair[1] < pair[0]);
        }
    }

    // -------------------------------------------------------------------------
    // Dupuit-Forchheimer (unconfined)
    // -------------------------------------------------------------------------

    #[test]
    fn test_dupuit_default_scenario() {
        let h = dupuit_head(300.0, 1.0, 0.0, WELL_RADIUS, 1000.0);
        let expected = (300.0 * (1000.0_f64 / 0.15).ln() / PI).sqrt();
        assert_close(h, expected, 1e-12);
        assert!((h - 29.0).abs() < 0.05, "got {h}");
    }

    #[test]
    fn test_dupuit_negative_radicand_clamped() {
        // h_ref² = 4, log term ≈ 840 → radicand strongly negative.
        let h = dupuit_head(300.0, 1.0, 2.0, WELL_RADIUS, 1000.0);
        let radicand = 4.0 - 300.0 * (1000.0_f64 / 0.15).ln() / PI;
        assert!(radicand < 0.0);
        assert!(h.is_finite());
        assert_close(h, radicand.abs().sqrt(), 1e-12);
    }

    #[test]
    fn test_dupuit_positive_radicand() {
        let h = dupuit_head(10.0, 50.0, 20.0, WELL_RADIUS, 100.0);
        let expected = (400.0 - 10.0 * (100.0_f64 / 0.15).ln() / (PI * 50.0)).sqrt();
        assert_close(h, expected, 1e-12);
        assert!(h < 20.0);
    }

    #[test]
    fn test_dupuit_zero_conductivity_sentinel() {
        let heads = evaluate(&AquiferModel::unconfined(0.0), 300.0, 10.0, WELL_RADIUS, &[5.0, 50.0]);
        assert_eq!(heads, vec![0.0, 0.0]);
        assert_eq!(try_dupuit_head(300.0, 0.0, 10.0, WELL_RADIUS, 5.0).value(), None);
    }

    #[test]
    fn test_evaluate_aligned_with_radii() {
        let radii: Vec<f64> = (1..=25).map(|i| i as f64 * 3.0).collect();
        let heads = evaluate(&AquiferModel::unconfined(4.0), 120.0, 0.0, WELL_RADIUS, &radii);
        assert_eq!(heads.len(), radii.len());
        assert!(evaluate(&AquiferModel::confined(4.0), 120.0, 0.0, WELL_RADIUS, &[]).is_empty());
    }

    // -------------------------------------------------------------------------
    // Drawdown derivation
    // -------------------------------------------------------------------------

    #[test]
    fn test_raw_drawdown_is_absolute_head() {
        let s = drawdown_series(&[-3.0, -1.5, 0.0, 2.0], DrawdownMode::Raw);
        assert_eq!(s, vec![3.0, 1.5, 0.0, 2.0]);
    }

    #[test]
    fn test_normalized_drawdown_zero_at_boundary() {
        let radii = [0.15, 1.0, 10.0, 123.456];
        for model in [AquiferModel::confined(8.0), AquiferModel::unconfined(8.0)] {
            let heads = evaluate(&model, 272.83, 0.0, WELL_RADIUS, &radii);
            let s = drawdown_series(&heads, DrawdownMode::Normalized);
            assert_eq!(*s.last().unwrap(), 0.0);
        }
    }

    #[test]
    fn test_normalized_drawdown_subtracts_boundary() {
        let s = drawdown_series(&[-10.0, -6.0, -4.0], DrawdownMode::Normalized);
        assert_eq!(s, vec![6.0, 2.0, 0.0]);
    }

    #[test]
    fn test_drawdown_empty_heads() {
        assert!(drawdown_series(&[], DrawdownMode::Normalized).is_empty());
    }

    // -------------------------------------------------------------------------
    // Inverse forms
    // -------------------------------------------------------------------------

    #[test]
    fn test_discharge_round_trip() {
        for (q, t, h2, r1, r2) in [
            (272.83, 8.0, 0.0, 0.15, 1000.0),
            (12.0, 0.05, 30.0, 0.3, 45.0),
            (499.0, 900.0, -5.0, 1.0, 2.0),
        ] {
            let h1 = evaluate(&AquiferModel::confined(t), q, h2, r1, &[r2])[0];
            let recovered = thiem_discharge(t, h1, h2, r1, r2);
            assert!(
                ((recovered - q) / q).abs() < 1e-9,
                "expected {q}, recovered {recovered}"
            );
        }
    }

    #[test]
    fn test_transmissivity_round_trip() {
        let h1 = thiem_head(200.0, 15.0, 0.0, 0.15, 500.0);
        let t = thiem_transmissivity(200.0, h1, 0.0, 0.15, 500.0);
        assert_close(t, 15.0, 1e-9);
    }

    #[test]
    fn test_transmissivity_equal_heads_sentinel() {
        assert_eq!(thiem_transmissivity(200.0, 4.0, 4.0, 0.15, 500.0), 0.0);
    }

    #[test]
    fn test_discharge_equal_radii_sentinel() {
        assert_eq!(thiem_discharge(8.0, 1.0, 2.0, 5.0, 5.0), 0.0);
    }

    #[test]
    fn test_outer_head_inverts_thiem() {
        let h1 = -7.5;
        let h2 = thiem_outer_head(272.83, 8.0, h1, 0.15, 300.0);
        let back = thiem_head(272.83, 8.0, h2, 0.15, 300.0);
        assert_close(back, h1, 1e-12);
        assert_eq!(thiem_outer_head(272.83, 0.0, h1, 0.15, 300.0), 0.0);
    }

    // -------------------------------------------------------------------------
    // Model type helpers
    // -------------------------------------------------------------------------

    #[test]
    fn test_model_serde_tagged() {
        let json = serde_json::to_string(&AquiferModel::unconfined(2.5)).unwrap();
        assert_eq!(json, r#"{"kind":"unconfined","conductivity":2.5}"#);
        let model: AquiferModel =
            serde_json::from_str(r#"{"kind":"confined","transmissivity":8.0}"#).unwrap();
        assert_eq!(model, AquiferModel::confined(8.0));
        assert!(model.is_confined());
    }

    #[test]
    fn test_default_mode_is_normalized() {
        assert_eq!(DrawdownMode::default(), DrawdownMode::Normalized);
    }
}
