//! Decoding of KMA JSON responses.
//!
//! A successful response looks like:
//!
//! ```json
//! {"response":{"header":{"resultCode":"00","resultMsg":"NORMAL_SERVICE"},
//!  "body":{"dataType":"JSON","items":{"item":[
//!    {"baseDate":"20250615","baseTime":"1400","category":"T1H","nx":98,"ny":77,"obsrValue":"27.3"}
//!  ]},"pageNo":1,"numOfRows":100,"totalCount":8}}}
//! ```
//!
//! Values arrive as strings or numbers depending on the product. Key and
//! quota errors come back as XML regardless of `dataType`.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use pet_common::{GridCell, WeatherObservation};
use quick_xml::events::Event;
use quick_xml::Reader;
use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::{BaseTime, KmaError};

/// Temperature category of the nowcast and ultra short-term forecast.
pub const CAT_T1H: &str = "T1H";
/// Temperature category of the village forecast.
pub const CAT_TMP: &str = "TMP";
/// Relative humidity (%)
pub const CAT_REH: &str = "REH";
/// Wind speed (m/s)
pub const CAT_WSD: &str = "WSD";

/// Values at or beyond ±900 mark missing data.
const MISSING_THRESHOLD: f64 = 900.0;

const RESULT_OK: &str = "00";

#[derive(Debug, Deserialize)]
struct Envelope {
    response: ResponseBody,
}

#[derive(Debug, Deserialize)]
struct ResponseBody {
    header: Header,
    #[serde(default)]
    body: Option<Body>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Header {
    result_code: String,
    #[serde(default)]
    result_msg: String,
}

#[derive(Debug, Deserialize)]
struct Body {
    items: Items,
}

/// `items` is an object normally and an empty string when there is no data.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Items {
    List { item: Vec<Item> },
    Empty(IgnoredAny),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Item {
    category: String,
    #[serde(default)]
    fcst_date: Option<String>,
    #[serde(default)]
    fcst_time: Option<String>,
    #[serde(default)]
    obsr_value: Option<RawValue>,
    #[serde(default)]
    fcst_value: Option<RawValue>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Numeric value, `None` for the missing-data sentinel.
    fn parse(&self, category: &str) -> Result<Option<f64>, KmaError> {
        let value = match self {
            RawValue::Number(v) => *v,
            RawValue::Text(s) => s.trim().parse::<f64>().map_err(|_| KmaError::InvalidValue {
                category: category.to_string(),
                value: s.clone(),
            })?,
        };
        if !value.is_finite() || value.abs() >= MISSING_THRESHOLD {
            Ok(None)
        } else {
            Ok(Some(value))
        }
    }
}

/// Parse the envelope and check the result code.
fn parse_items(body: &str) -> Result<Vec<Item>, KmaError> {
    let trimmed = body.trim_start();
    if trimmed.starts_with('<') {
        return Err(xml_error(trimmed));
    }

    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| KmaError::Decode(e.to_string()))?;
    let header = envelope.response.header;
    if header.result_code != RESULT_OK {
        return Err(KmaError::Api {
            code: header.result_code,
            message: header.result_msg,
        });
    }

    match envelope.response.body.map(|b| b.items) {
        Some(Items::List { item }) => Ok(item),
        Some(Items::Empty(_)) | None => Ok(Vec::new()),
    }
}

/// Fields of an `OpenAPI_ServiceResponse` error document.
#[derive(Debug, Default)]
struct XmlFault {
    reason_code: Option<String>,
    auth_msg: Option<String>,
    err_msg: Option<String>,
}

impl XmlFault {
    fn slot(&mut self, tag: &[u8]) -> Option<&mut Option<String>> {
        match tag {
            b"returnReasonCode" => Some(&mut self.reason_code),
            b"returnAuthMsg" => Some(&mut self.auth_msg),
            b"errMsg" => Some(&mut self.err_msg),
            _ => None,
        }
    }
}

fn read_xml_fault(xml: &str) -> Result<XmlFault, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    reader.trim_text(true);

    let mut fault = XmlFault::default();
    let mut current: Option<Vec<u8>> = None;
    let mut text = String::new();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                current = Some(e.local_name().as_ref().to_vec());
                text.clear();
            }
            Event::Text(t) if current.is_some() => text.push_str(&t.unescape()?),
            Event::CData(c) if current.is_some() => {
                text.push_str(&String::from_utf8_lossy(&c.into_inner()))
            }
            Event::End(e) => {
                if current.as_deref() == Some(e.local_name().as_ref()) {
                    let value = text.trim();
                    if let Some(slot) = fault.slot(e.local_name().as_ref()) {
                        if slot.is_none() && !value.is_empty() {
                            *slot = Some(value.to_string());
                        }
                    }
                }
                current = None;
                text.clear();
            }
            Event::Eof => break,
            _ => {}
        }
    }
    Ok(fault)
}

/// Map an XML error document to an API error.
fn xml_error(xml: &str) -> KmaError {
    let fault = match read_xml_fault(xml) {
        Ok(fault) => fault,
        Err(e) => return KmaError::Decode(format!("malformed XML response: {}", e)),
    };
    KmaError::Api {
        code: fault.reason_code.unwrap_or_else(|| "XML".to_string()),
        message: fault
            .auth_msg
            .or(fault.err_msg)
            .unwrap_or_else(|| "unexpected XML response".to_string()),
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct Triple {
    temperature: Option<f64>,
    humidity: Option<f64>,
    wind_speed: Option<f64>,
}

impl Triple {
    fn set(&mut self, category: &str, value: &RawValue) -> Result<(), KmaError> {
        let slot = match category {
            CAT_T1H | CAT_TMP => &mut self.temperature,
            CAT_REH => &mut self.humidity,
            CAT_WSD => &mut self.wind_speed,
            _ => return Ok(()),
        };
        *slot = value.parse(category)?;
        Ok(())
    }

    fn complete(&self) -> Option<(f64, f64, f64)> {
        Some((self.temperature?, self.humidity?, self.wind_speed?))
    }

    fn first_missing(&self, temperature_category: &'static str) -> &'static str {
        if self.temperature.is_none() {
            temperature_category
        } else if self.humidity.is_none() {
            CAT_REH
        } else {
            CAT_WSD
        }
    }
}

/// Decode a `getUltraSrtNcst` response.
pub fn decode_nowcast(
    body: &str,
    cell: GridCell,
    base: BaseTime,
) -> Result<WeatherObservation, KmaError> {
    let items = parse_items(body)?;

    let mut triple = Triple::default();
    for item in &items {
        if let Some(value) = &item.obsr_value {
            triple.set(&item.category, value)?;
        }
    }

    let (air_temperature, humidity, wind_speed) = triple
        .complete()
        .ok_or_else(|| KmaError::MissingCategory(triple.first_missing(CAT_T1H)))?;

    Ok(WeatherObservation {
        air_temperature,
        humidity,
        wind_speed,
        cell,
        base_time: base.datetime(),
        valid_time: base.datetime(),
    })
}

fn parse_slot(date: &str, time: &str) -> Option<NaiveDateTime> {
    let date = NaiveDate::parse_from_str(date, "%Y%m%d").ok()?;
    let time = NaiveTime::parse_from_str(time, "%H%M").ok()?;
    Some(date.and_time(time))
}

/// Decode a `getVilageFcst` response.
///
/// Items are grouped by forecast slot. The earliest complete slot starting
/// at or after `not_before` is chosen; if every complete slot is earlier,
/// the latest complete one is used.
pub fn decode_forecast(
    body: &str,
    cell: GridCell,
    base: BaseTime,
    not_before: NaiveDateTime,
) -> Result<WeatherObservation, KmaError> {
    let items = parse_items(body)?;

    let mut slots: BTreeMap<NaiveDateTime, Triple> = BTreeMap::new();
    for item in &items {
        let (Some(date), Some(time), Some(value)) = (&item.fcst_date, &item.fcst_time, &item.fcst_value)
        else {
            continue;
        };
        let Some(slot) = parse_slot(date, time) else {
            return Err(KmaError::Decode(format!(
                "invalid forecast slot '{} {}'",
                date, time
            )));
        };
        slots.entry(slot).or_default().set(&item.category, value)?;
    }

    let complete: Vec<(NaiveDateTime, (f64, f64, f64))> = slots
        .iter()
        .filter_map(|(slot, triple)| triple.complete().map(|v| (*slot, v)))
        .collect();

    let chosen = complete
        .iter()
        .find(|(slot, _)| *slot >= not_before)
        .or_else(|| complete.last());

    let Some(&(valid_time, (air_temperature, humidity, wind_speed))) = chosen else {
        let missing = slots
            .values()
            .next()
            .map(|t| t.first_missing(CAT_TMP))
            .unwrap_or(CAT_TMP);
        return Err(KmaError::MissingCategory(missing));
    };

    Ok(WeatherObservation {
        air_temperature,
        humidity,
        wind_speed,
        cell,
        base_time: base.datetime(),
        valid_time,
    })
}
