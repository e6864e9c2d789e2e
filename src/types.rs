use serde::Deserialize;

use crate::error::Error;

/// A `uint256` as the provider layer hands it over: a JSON number for small
/// values, a decimal or `0x` hex string for big-number wrappers.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawUint {
    Number(u64),
    Text(String),
}

impl RawUint {
    pub fn to_u128(&self, field: &str) -> Result<u128, Error> {
        match self {
            Self::Number(n) => Ok(u128::from(*n)),
            Self::Text(s) => {
                let s = s.trim();
                let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
                    Some(hex) => u128::from_str_radix(hex, 16),
                    None => s.parse::<u128>(),
                };
                parsed.map_err(|e| Error::Parse {
                    reason: format!("{field}: {s:?} is not an unsigned integer: {e}"),
                })
            }
        }
    }

    pub fn to_u64(&self, field: &str) -> Result<u64, Error> {
        let value = self.to_u128(field)?;
        u64::try_from(value).map_err(|_| Error::Parse {
            reason: format!("{field}: {value} does not fit in 64 bits"),
        })
    }
}

/// Result of the Loketh `getEvent(id)` call.
///
/// Accepts the positional array form and the keyed result object some
/// providers return (extra numeric keys are ignored).
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawEvent {
    Positional(String, String, RawUint, RawUint, RawUint, RawUint, RawUint, RawUint),
    #[serde(rename_all = "camelCase")]
    Keyed {
        name: String,
        organizer: String,
        start_time: RawUint,
        end_time: RawUint,
        price: RawUint,
        quota: RawUint,
        sold_counter: RawUint,
        money_collected: RawUint,
    },
}

/// Result of the Loketh `getTicket(id)` call.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawTicket {
    Positional(RawUint, String),
    #[serde(rename_all = "camelCase")]
    Keyed {
        event_id: RawUint,
        participant: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: u64,
    pub name: String,
    pub organizer: String,
    /// Unix seconds.
    pub start_time: u64,
    pub end_time: u64,
    /// Ticket price in the token's smallest unit.
    #[serde(serialize_with = "as_decimal")]
    pub price: u128,
    pub quota: u64,
    pub sold_counter: u64,
    #[serde(serialize_with = "as_decimal")]
    pub money_collected: u128,
}

impl Event {
    pub fn from_raw(id: u64, raw: RawEvent) -> Result<Self, Error> {
        let (name, organizer, start_time, end_time, price, quota, sold_counter, money_collected) =
            match raw {
                RawEvent::Positional(
                    name,
                    organizer,
                    start_time,
                    end_time,
                    price,
                    quota,
                    sold_counter,
                    money_collected,
                )
                | RawEvent::Keyed {
                    name,
                    organizer,
                    start_time,
                    end_time,
                    price,
                    quota,
                    sold_counter,
                    money_collected,
                } => (
                    name,
                    organizer,
                    start_time,
                    end_time,
                    price,
                    quota,
                    sold_counter,
                    money_collected,
                ),
            };

        Ok(Self {
            id,
            name,
            organizer: parse_address("organizer", organizer)?,
            start_time: start_time.to_u64("startTime")?,
            end_time: end_time.to_u64("endTime")?,
            price: price.to_u128("price")?,
            quota: quota.to_u64("quota")?,
            sold_counter: sold_counter.to_u64("soldCounter")?,
            money_collected: money_collected.to_u128("moneyCollected")?,
        })
    }

    pub fn remaining_quota(&self) -> u64 {
        self.quota.saturating_sub(self.sold_counter)
    }

    pub fn is_sold_out(&self) -> bool {
        self.remaining_quota() == 0
    }

    pub fn has_ended(&self, now: u64) -> bool {
        now >= self.end_time
    }

    /// Addresses compare case-insensitively; checksum casing is not significant.
    pub fn is_organized_by(&self, address: &str) -> bool {
        self.organizer.eq_ignore_ascii_case(address)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: u64,
    pub event_id: u64,
    pub participant: String,
}

impl Ticket {
    pub fn from_raw(id: u64, raw: RawTicket) -> Result<Self, Error> {
        let (event_id, participant) = match raw {
            RawTicket::Positional(event_id, participant)
            | RawTicket::Keyed {
                event_id,
                participant,
            } => (event_id, participant),
        };
        Ok(Self {
            id,
            event_id: event_id.to_u64("eventId")?,
            participant: parse_address("participant", participant)?,
        })
    }
}

pub fn parse_event(id: u64, value: &serde_json::Value) -> Result<Event, Error> {
    Event::from_raw(id, RawEvent::deserialize(value)?)
}

pub fn parse_ticket(id: u64, value: &serde_json::Value) -> Result<Ticket, Error> {
    Ticket::from_raw(id, RawTicket::deserialize(value)?)
}

/// Largest integer a JS number represents exactly.
pub const MAX_SAFE_ID: f64 = 9_007_199_254_740_991.0;

/// Convert an id received as a float (JS number), rejecting NaN, fractions and
/// negatives instead of truncating them.
pub fn id_from_f64(id: f64) -> Result<u64, Error> {
    if id.fract() == 0.0 && (0.0..=MAX_SAFE_ID).contains(&id) {
        Ok(id as u64)
    } else {
        Err(Error::InvalidArgument {
            reason: format!("id must be a non-negative integer, got {id}"),
        })
    }
}

fn parse_address(field: &str, address: String) -> Result<String, Error> {
    let valid = address
        .strip_prefix("0x")
        .is_some_and(|hex| hex.len() == 40 && hex.bytes().all(|b| b.is_ascii_hexdigit()));
    if valid {
        Ok(address)
    } else {
        Err(Error::Parse {
            reason: format!("{field}: {address:?} is not a 20-byte hex address"),
        })
    }
}

fn as_decimal<S: serde::Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
