use chrono::{DateTime, NaiveDate, Utc};
use fake::Fake;
use fake::faker::address::raw::StreetName;
use fake::faker::chrono::raw::DateTimeBetween;
use fake::faker::name::raw::Name;
use fake::locales::PT_BR;
use rand::{Rng, RngCore};

/// Locale-aware fake-data capability consumed by the record assembler.
pub trait FakeProvider {
    fn person_name(&self, rng: &mut dyn RngCore) -> String;
    fn street_name(&self, rng: &mut dyn RngCore) -> String;
    fn neighborhood(&self, rng: &mut dyn RngCore) -> String;
    /// Random calendar date with inclusive bounds.
    fn date_between(&self, min: NaiveDate, max: NaiveDate, rng: &mut dyn RngCore) -> NaiveDate;
}

/// Provider backed by the `fake` crate's pt_BR locale.
///
/// The fake crate ships no neighborhood faker, so neighborhoods come
/// from a fixed Recife list.
#[derive(Debug, Clone, Copy, Default)]
pub struct PtBrProvider;

impl FakeProvider for PtBrProvider {
    fn person_name(&self, rng: &mut dyn RngCore) -> String {
        Name(PT_BR).fake_with_rng(rng)
    }

    fn street_name(&self, rng: &mut dyn RngCore) -> String {
        StreetName(PT_BR).fake_with_rng(rng)
    }

    fn neighborhood(&self, rng: &mut dyn RngCore) -> String {
        let idx = rng.random_range(0..NEIGHBORHOODS.len());
        NEIGHBORHOODS[idx].to_string()
    }

    fn date_between(&self, min: NaiveDate, max: NaiveDate, rng: &mut dyn RngCore) -> NaiveDate {
        let start = day_start(min);
        // sample over [min, max + 1 day) so the upper date stays reachable
        let end = day_start(max.succ_opt().unwrap_or(max));
        let value: DateTime<Utc> = DateTimeBetween(PT_BR, start, end).fake_with_rng(rng);
        value.date_naive()
    }
}

fn day_start(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc()
}

const NEIGHBORHOODS: &[&str] = &[
    "Boa Viagem",
    "Boa Vista",
    "Casa Forte",
    "Casa Amarela",
    "Espinheiro",
    "Gracas",
    "Imbiribeira",
    "Madalena",
    "Pina",
    "Torre",
    "Varzea",
    "Afogados",
];
