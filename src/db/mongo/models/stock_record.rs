use serde::{Deserialize, Deserializer, Serialize, de};
use std::fmt;

/// One daily quote as loaded into the stocks collection.
///
/// Keys absent from a stored document decode to their defaults; a key holding
/// the wrong BSON type fails the decode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StockRecord {
    pub exchange: String,
    #[serde(rename = "stock_symbol")]
    pub symbol: String,
    pub date: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    #[serde(deserialize_with = "integral_volume")]
    pub volume: i64,
    #[serde(rename = "adj close")]
    pub adj_close: f64,
}

/// Accepts any BSON integer, or a double with no fractional part, since
/// importers often store share counts as doubles.
fn integral_volume<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct VolumeVisitor;

    impl de::Visitor<'_> for VolumeVisitor {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integral volume")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::invalid_value(de::Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                Ok(v as i64)
            } else {
                Err(E::invalid_value(de::Unexpected::Float(v), &self))
            }
        }
    }

    deserializer.deserialize_any(VolumeVisitor)
}
