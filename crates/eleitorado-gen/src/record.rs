use chrono::{Months, NaiveDate};
use rand::{Rng, RngCore};
use serde::Serialize;

use crate::ids;
use crate::provider::FakeProvider;

/// CSV column names, in serialization order.
pub const FIELD_NAMES: &[&str] = &[
    "nome",
    "cpf",
    "nascimento",
    "whatsapp",
    "telefone",
    "genero",
    "titulo",
    "zona",
    "secao",
    "cep",
    "logradouro",
    "cidade",
    "bairro",
    "numero",
    "complemento",
    "empresa_id",
    "indicado",
    "uf",
    "categoria",
    "responsavel",
    "latitude",
    "longitude",
];

pub const GENDERS: &[&str] = &["M", "F"];
pub const REFERRER_CODES: &[i64] = &[10, 12, 9];
pub const CATEGORY_CODES: &[i64] = &[12, 13, 14, 15];
pub const COMPLEMENTS: &[&str] = &["", "Apto 101", "Casa A", "Bloco B"];

pub const CITY: &str = "Recife";
pub const STATE: &str = "PE";
pub const RESPONSIBLE: &str = "Josuel";
pub const COMPANY_ID: i64 = 1;
pub const PHONE_PREFIX: &str = "819";

pub const MIN_AGE_YEARS: u32 = 18;
pub const MAX_AGE_YEARS: u32 = 80;

// Recife bounding box.
pub const LAT_RANGE: (f64, f64) = (-8.15, -8.05);
pub const LON_RANGE: (f64, f64) = (-34.95, -34.85);

/// One synthetic voter, shaped like a row of `voters_simulation.csv`.
///
/// Fixed-length identifiers stay text so zero padding survives
/// serialization.
#[derive(Debug, Clone, Serialize)]
pub struct VoterRecord {
    pub nome: String,
    pub cpf: String,
    pub nascimento: NaiveDate,
    pub whatsapp: String,
    pub telefone: String,
    pub genero: String,
    pub titulo: String,
    pub zona: String,
    pub secao: String,
    pub cep: String,
    pub logradouro: String,
    pub cidade: String,
    pub bairro: String,
    pub numero: String,
    pub complemento: String,
    pub empresa_id: i64,
    pub indicado: i64,
    pub uf: String,
    pub categoria: i64,
    pub responsavel: String,
    pub latitude: String,
    pub longitude: String,
}

/// Assemble one fully populated voter record.
///
/// Every field is populated; only `complemento` may legitimately be the
/// empty string, as one of its enumerated values. No I/O happens here,
/// the only side effect is consuming entropy from `rng`.
pub fn generate_voter(
    provider: &dyn FakeProvider,
    today: NaiveDate,
    rng: &mut dyn RngCore,
) -> VoterRecord {
    let min_birth = today
        .checked_sub_months(Months::new(MAX_AGE_YEARS * 12))
        .unwrap_or(today);
    let max_birth = today
        .checked_sub_months(Months::new(MIN_AGE_YEARS * 12))
        .unwrap_or(today);
    let nascimento = provider.date_between(min_birth, max_birth, rng);

    let lat = rng.random_range(LAT_RANGE.0..=LAT_RANGE.1);
    let lon = rng.random_range(LON_RANGE.0..=LON_RANGE.1);

    VoterRecord {
        nome: provider.person_name(rng),
        cpf: ids::cpf(rng),
        nascimento,
        whatsapp: phone(rng),
        telefone: phone(rng),
        genero: pick_str(GENDERS, rng),
        titulo: ids::voter_title(rng),
        zona: rng.random_range(1..=150_u32).to_string(),
        secao: rng.random_range(1..=500_u32).to_string(),
        cep: format!("5{:07}", rng.random_range(0..=9_999_999_u32)),
        logradouro: provider.street_name(rng),
        cidade: CITY.to_string(),
        bairro: provider.neighborhood(rng),
        numero: rng.random_range(1..=9999_u32).to_string(),
        complemento: pick_str(COMPLEMENTS, rng),
        empresa_id: COMPANY_ID,
        indicado: pick_i64(REFERRER_CODES, rng),
        uf: STATE.to_string(),
        categoria: pick_i64(CATEGORY_CODES, rng),
        responsavel: RESPONSIBLE.to_string(),
        latitude: format!("{lat:.6}"),
        longitude: format!("{lon:.6}"),
    }
}

fn phone(rng: &mut dyn RngCore) -> String {
    // 8-digit suffix with a nonzero leading digit
    format!(
        "{PHONE_PREFIX}{}",
        rng.random_range(10_000_000..=99_999_999_u32)
    )
}

fn pick_str(values: &[&str], rng: &mut dyn RngCore) -> String {
    values[rng.random_range(0..values.len())].to_string()
}

fn pick_i64(values: &[i64], rng: &mut dyn RngCore) -> i64 {
    values[rng.random_range(0..values.len())]
}
