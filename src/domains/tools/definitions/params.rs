//! Parameter types for the DataMall tools.
//!
//! Each struct is both the deserialization target for incoming arguments and
//! the source of the tool's JSON input schema.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

/// Look up arrivals at one bus stop, optionally for a single service.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct BusArrivalParams {
    /// Five-digit bus stop reference code.
    #[serde(deserialize_with = "string_or_number")]
    #[schemars(with = "String", description = "Bus stop reference code (e.g. 83139)")]
    pub bus_stop_code: String,

    /// Bus service number to filter on.
    #[serde(default, deserialize_with = "optional_string_or_number")]
    #[schemars(
        with = "Option<String>",
        description = "Bus service number (optional, e.g. 15). Omit to get every service at the stop"
    )]
    pub service_no: Option<String>,
}

/// Select the train line to report stations for.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrainLineParams {
    /// Train network line code.
    #[schemars(description = "Train network line code")]
    pub train_line: TrainLine,
}

/// This tool takes no arguments.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct NoParams {}

/// Rail lines DataMall reports platform crowd density for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
// No variant doc comments: schemars would emit `oneOf` instead of `enum`.
#[schemars(inline)]
pub enum TrainLine {
    // Circle Line
    Ccl,
    // Circle Line Extension
    Cel,
    // Changi Airport Branch Line
    Cgl,
    // Downtown Line
    Dtl,
    // East West Line
    Ewl,
    // North East Line
    Nel,
    // North South Line
    Nsl,
    // Bukit Panjang LRT
    Bpl,
    // Sengkang LRT
    Slrt,
    // Punggol LRT
    Plrt,
    // Thomson-East Coast Line
    Tel,
}

impl TrainLine {
    /// Every line, in catalog order.
    pub const ALL: [TrainLine; 11] = [
        TrainLine::Ccl,
        TrainLine::Cel,
        TrainLine::Cgl,
        TrainLine::Dtl,
        TrainLine::Ewl,
        TrainLine::Nel,
        TrainLine::Nsl,
        TrainLine::Bpl,
        TrainLine::Slrt,
        TrainLine::Plrt,
        TrainLine::Tel,
    ];

    /// The code DataMall expects in the `TrainLine` query parameter.
    pub fn code(self) -> &'static str {
        match self {
            TrainLine::Ccl => "CCL",
            TrainLine::Cel => "CEL",
            TrainLine::Cgl => "CGL",
            TrainLine::Dtl => "DTL",
            TrainLine::Ewl => "EWL",
            TrainLine::Nel => "NEL",
            TrainLine::Nsl => "NSL",
            TrainLine::Bpl => "BPL",
            TrainLine::Slrt => "SLRT",
            TrainLine::Plrt => "PLRT",
            TrainLine::Tel => "TEL",
        }
    }
}

/// Accept `"83139"` as well as `83139`; agents often send codes as numbers.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Text(s) => s,
        Scalar::Number(n) => n.to_string(),
    })
}

fn optional_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct Wrapper(#[serde(deserialize_with = "string_or_number")] String);

    Ok(Option::<Wrapper>::deserialize(deserializer)?.map(|Wrapper(s)| s))
}
