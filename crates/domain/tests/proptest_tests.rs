//! Property-based tests for the resolution engine
//!
//! These tests use proptest to verify invariants across many random inputs.

use chrono::NaiveTime;
use domain::{
    AqiBand, ElementId, ForecastDay, HourlyEntry, IconId, SizeConstraint, Visibility,
    WeatherSnapshot, WidgetVariant, color_for_aqi, forecast_icon_for, icon_for, registry, resolve,
    resolve_notification,
};
use proptest::prelude::*;

fn any_variant() -> impl Strategy<Value = WidgetVariant> {
    prop::sample::select(WidgetVariant::all().to_vec())
}

fn any_constraint() -> impl Strategy<Value = SizeConstraint> {
    (0u32..400, 0u32..400).prop_map(|(w, h)| SizeConstraint::new(w, h))
}

fn any_text() -> impl Strategy<Value = Option<String>> {
    prop::option::of("[a-zA-Z0-9 :°/.]{0,16}")
}

fn any_day() -> impl Strategy<Value = ForecastDay> {
    (any_text(), any_text(), any_text()).prop_map(|(name, temp, condition)| ForecastDay {
        name,
        temp,
        condition,
    })
}

fn any_hour() -> impl Strategy<Value = HourlyEntry> {
    (any_text(), any_text(), any_text()).prop_map(|(time, temp, condition)| HourlyEntry {
        time,
        temp,
        condition,
    })
}

prop_compose! {
    fn any_snapshot()(
        current in (any_text(), any_text(), any_text(), any_text(), any_text(), any_text()),
        is_night in prop::option::of(any::<bool>()),
        sun in (any_text(), any_text()),
        aqi_value in prop::option::of(-50i64..600),
        aqi in (any_text(), any_text()),
        forecast_days in prop::collection::vec(any_day(), 0..7),
        hourly in prop::collection::vec(any_hour(), 0..7),
    ) -> WeatherSnapshot {
        let (temperature, condition, location, feels_like, humidity, wind_speed) = current;
        WeatherSnapshot {
            temperature,
            condition,
            location,
            feels_like,
            humidity,
            wind_speed,
            is_night,
            sunrise: sun.0,
            sunset: sun.1,
            aqi_value,
            aqi_description: aqi.0,
            pm25: aqi.1,
            forecast_days,
            hourly,
        }
    }
}

// ============================================================================
// Resolution Property Tests
// ============================================================================

mod resolve_tests {
    use super::*;

    proptest! {
        #[test]
        fn resolution_is_deterministic(
            variant in any_variant(),
            snapshot in any_snapshot(),
            constraint in any_constraint()
        ) {
            let a = resolve(variant, &snapshot, constraint);
            let b = resolve(variant, &snapshot, constraint);
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(
                serde_json::to_string(&a).unwrap(),
                serde_json::to_string(&b).unwrap()
            );
        }

        #[test]
        fn visibility_covers_exactly_the_schema(
            variant in any_variant(),
            snapshot in any_snapshot(),
            constraint in any_constraint()
        ) {
            let plan = resolve(variant, &snapshot, constraint);
            let schema = registry::schema(variant);
            let keys: Vec<ElementId> = plan.visibilities().keys().copied().collect();
            let mut expected = schema.elements.to_vec();
            expected.sort();
            prop_assert_eq!(keys, expected);
        }

        #[test]
        fn fixed_layouts_always_fully_visible(
            variant in prop::sample::select(vec![
                WidgetVariant::WeatherSmall,
                WidgetVariant::Wind,
                WidgetVariant::ForecastRow,
            ]),
            snapshot in any_snapshot(),
            constraint in any_constraint()
        ) {
            let plan = resolve(variant, &snapshot, constraint);
            prop_assert!(plan.visibilities().values().all(|v| v.is_shown()));
        }

        #[test]
        fn primary_datum_always_visible(
            snapshot in any_snapshot(),
            constraint in any_constraint()
        ) {
            let aqi = resolve(WidgetVariant::AqiCompact, &snapshot, constraint);
            prop_assert!(aqi.is_shown(ElementId::AqiValue));
            let sun = resolve(WidgetVariant::SunPath, &snapshot, constraint);
            prop_assert!(sun.is_shown(ElementId::Sunset));
            let medium = resolve(WidgetVariant::WeatherMedium, &snapshot, constraint);
            prop_assert!(medium.is_shown(ElementId::Temperature));
            prop_assert!(medium.is_shown(ElementId::WeatherIcon));
        }

        #[test]
        fn hidden_group_hides_its_members(
            snapshot in any_snapshot(),
            constraint in any_constraint()
        ) {
            let groups = [
                (
                    WidgetVariant::AqiCompact,
                    ElementId::AqiDetails,
                    &[ElementId::AqiDescription, ElementId::AqiPm25][..],
                ),
                (
                    WidgetVariant::WeatherMedium,
                    ElementId::WeatherDetails,
                    &[ElementId::FeelsLike, ElementId::Humidity][..],
                ),
                (
                    WidgetVariant::SunPath,
                    ElementId::SunriseLayout,
                    &[ElementId::Sunrise][..],
                ),
            ];
            for (variant, group, members) in groups {
                let plan = resolve(variant, &snapshot, constraint);
                for member in members {
                    prop_assert_eq!(plan.visibility(*member), plan.visibility(group));
                }
            }
        }

        #[test]
        fn width_and_height_rules_are_independent(
            width in 0u32..400,
            h1 in 110u32..400,
            h2 in 110u32..400,
        ) {
            let snap = WeatherSnapshot::default();
            let a = resolve(WidgetVariant::WeatherMedium, &snap, SizeConstraint::new(width, h1));
            let b = resolve(WidgetVariant::WeatherMedium, &snap, SizeConstraint::new(width, h2));
            prop_assert_eq!(
                a.visibility(ElementId::Condition),
                b.visibility(ElementId::Condition)
            );
        }

        #[test]
        fn every_text_slot_is_filled(
            variant in any_variant(),
            snapshot in any_snapshot(),
            constraint in any_constraint()
        ) {
            let plan = resolve(variant, &snapshot, constraint);
            prop_assert!(plan.texts().values().all(|t| !t.trim().is_empty()));
            for item in plan.items() {
                prop_assert!(item.texts().values().all(|t| !t.trim().is_empty()));
            }
        }

        #[test]
        fn forecast_items_are_ordered_and_named(snapshot in any_snapshot()) {
            let plan = resolve(WidgetVariant::ForecastRow, &snapshot, SizeConstraint::new(250, 110));
            let slots: Vec<u8> = plan.items().iter().map(|i| i.slot()).collect();
            prop_assert!(slots.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(slots.iter().all(|s| (1..=5).contains(s)));
            let named = snapshot
                .forecast_days
                .iter()
                .take(5)
                .filter(|d| d.name.as_deref().is_some_and(|n| !n.trim().is_empty()))
                .count();
            prop_assert_eq!(plan.items().len(), named);
        }

        #[test]
        fn hourly_items_are_ordered(snapshot in any_snapshot()) {
            let at = NaiveTime::from_hms_opt(8, 30, 0).unwrap();
            let plan = resolve_notification(&snapshot, at);
            let slots: Vec<u8> = plan.items().iter().map(|i| i.slot()).collect();
            prop_assert!(slots.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(slots.iter().all(|s| *s < 5));
        }
    }
}

// ============================================================================
// Classification Property Tests
// ============================================================================

mod classification_tests {
    use super::*;

    proptest! {
        #[test]
        fn night_always_wins(condition in ".*") {
            prop_assert_eq!(icon_for(&condition, true), IconId::Night);
        }

        #[test]
        fn forecast_icon_is_never_night(condition in ".*") {
            prop_assert_ne!(forecast_icon_for(&condition), IconId::Night);
        }

        #[test]
        fn rain_words_win_regardless_of_context(
            prefix in "[a-z ]{0,10}",
            word in prop::sample::select(vec!["rain", "drizzle", "thunder"]),
            suffix in "[a-z ]{0,10}",
        ) {
            let condition = format!("{prefix}{word}{suffix}");
            prop_assert_eq!(icon_for(&condition, false), IconId::Rainy);
        }

        #[test]
        fn classification_ignores_case(condition in "[a-zA-Z ]{0,20}") {
            prop_assert_eq!(
                icon_for(&condition, false),
                icon_for(&condition.to_uppercase(), false)
            );
        }

        #[test]
        fn aqi_bands_are_monotonic(a in -100i64..1000, b in -100i64..1000) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(AqiBand::from_aqi(lo) <= AqiBand::from_aqi(hi));
        }

        #[test]
        fn color_follows_band(aqi in -100i64..1000) {
            prop_assert_eq!(color_for_aqi(aqi), AqiBand::from_aqi(aqi).color());
        }

        #[test]
        fn aqi_progress_within_bounds(aqi in prop::option::of(-1000i64..5000)) {
            let snap = WeatherSnapshot { aqi_value: aqi, ..WeatherSnapshot::default() };
            let plan = resolve(WidgetVariant::AqiCompact, &snap, SizeConstraint::new(200, 200));
            prop_assert_eq!(plan.progresses().len(), 1);
            for progress in plan.progresses().values() {
                prop_assert!(progress.value <= progress.max);
            }
        }
    }

    #[test]
    fn narrowest_sun_path_hides_sunrise_group() {
        let plan = resolve(
            WidgetVariant::SunPath,
            &WeatherSnapshot::default(),
            SizeConstraint::new(0, 0),
        );
        assert_eq!(plan.visibility(ElementId::SunIcon), Visibility::Hidden);
        assert_eq!(plan.visibility(ElementId::SunriseLayout), Visibility::Hidden);
        assert_eq!(plan.visibility(ElementId::Sunrise), Visibility::Hidden);
        assert_eq!(plan.visibility(ElementId::Sunset), Visibility::Shown);
    }
}
