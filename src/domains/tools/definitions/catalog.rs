//! Static catalog of DataMall tools.
//!
//! One [`EndpointBinding`] per tool: its MCP name and description, the
//! DataMall path it forwards to, and the shape of arguments it accepts.
//! Adding a tool is a new table entry; the dispatch code does not change.

use std::sync::Arc;

use rmcp::{
    handler::server::tool::cached_schema_for_type,
    model::{JsonObject, Tool},
};

use super::params::{BusArrivalParams, NoParams, TrainLineParams};
use crate::domains::tools::ToolError;

/// Query parameter pairs forwarded to DataMall.
pub type QueryPairs = Vec<(&'static str, String)>;

/// The arguments a tool accepts and how they map onto query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentShape {
    /// No arguments; any provided are ignored.
    None,
    /// `busStopCode` (required) and `serviceNo` (optional).
    BusStop,
    /// `trainLine` (required).
    TrainLine,
}

impl ArgumentShape {
    /// JSON schema advertised for this shape.
    pub fn input_schema(self) -> Arc<JsonObject> {
        match self {
            ArgumentShape::None => cached_schema_for_type::<NoParams>(),
            ArgumentShape::BusStop => cached_schema_for_type::<BusArrivalParams>(),
            ArgumentShape::TrainLine => cached_schema_for_type::<TrainLineParams>(),
        }
    }

    /// Narrow untyped arguments into the query pairs DataMall expects.
    ///
    /// Optional arguments that are absent produce no pair. Missing or
    /// malformed required arguments are rejected here, before any request.
    pub fn query(self, tool: &str, arguments: Option<JsonObject>) -> Result<QueryPairs, ToolError> {
        let arguments = serde_json::Value::Object(arguments.unwrap_or_default());

        match self {
            ArgumentShape::None => Ok(Vec::new()),
            ArgumentShape::BusStop => {
                let params: BusArrivalParams = serde_json::from_value(arguments)
                    .map_err(|e| ToolError::invalid_arguments(tool, e.to_string()))?;

                let mut pairs = vec![("BusStopCode", params.bus_stop_code)];
                if let Some(service_no) = params.service_no {
                    pairs.push(("ServiceNo", service_no));
                }
                Ok(pairs)
            }
            ArgumentShape::TrainLine => {
                let params: TrainLineParams = serde_json::from_value(arguments)
                    .map_err(|e| ToolError::invalid_arguments(tool, e.to_string()))?;

                Ok(vec![("TrainLine", params.train_line.code().to_string())])
            }
        }
    }
}

/// A tool and the DataMall endpoint behind it.
#[derive(Debug, Clone, Copy)]
pub struct EndpointBinding {
    /// Tool name as registered in MCP.
    pub name: &'static str,

    /// Tool description shown to clients.
    pub description: &'static str,

    /// Path appended to the DataMall root. Always fetched with GET.
    pub path: &'static str,

    /// Accepted arguments.
    pub shape: ArgumentShape,
}

impl EndpointBinding {
    /// Create a Tool model for this binding (metadata).
    pub fn to_tool(&self) -> Tool {
        Tool {
            name: self.name.into(),
            description: Some(self.description.into()),
            input_schema: self.shape.input_schema(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

/// Every tool this server exposes, in listing order.
pub static CATALOG: [EndpointBinding; 7] = [
    EndpointBinding {
        name: "bus_arrival",
        description: "Get real-time bus arrival information for a bus stop: estimated arrival \
            times, load and wheelchair accessibility of the next three buses of each service. \
            Optionally restrict to a single service number.",
        path: "/v3/BusArrival",
        shape: ArgumentShape::BusStop,
    },
    EndpointBinding {
        name: "station_crowding",
        description: "Get real-time platform crowdedness level (low, moderate, high) for every \
            station on a train line, updated every 10 minutes.",
        path: "/PCDRealTime",
        shape: ArgumentShape::TrainLine,
    },
    EndpointBinding {
        name: "train_alerts",
        description: "Get train service alerts: line disruptions, affected stations, free \
            bus/shuttle services and status messages.",
        path: "/TrainServiceAlerts",
        shape: ArgumentShape::None,
    },
    EndpointBinding {
        name: "carpark_availability",
        description: "Get the number of available lots for HDB, LTA and URA carparks, \
            updated every minute.",
        path: "/CarParkAvailabilityv2",
        shape: ArgumentShape::None,
    },
    EndpointBinding {
        name: "travel_times",
        description: "Get estimated travel times of expressway segments, updated every \
            5 minutes.",
        path: "/EstTravelTimes",
        shape: ArgumentShape::None,
    },
    EndpointBinding {
        name: "traffic_incidents",
        description: "Get current road incidents: accidents, vehicle breakdowns, road blocks, \
            roadworks and heavy traffic, with their locations.",
        path: "/TrafficIncidents",
        shape: ArgumentShape::None,
    },
    EndpointBinding {
        name: "station_crowd_forecast",
        description: "Get forecasted platform crowdedness level for every station on a train \
            line, in 30-minute intervals.",
        path: "/PCDForecast",
        shape: ArgumentShape::TrainLine,
    },
];

/// Look up a binding by tool name.
pub fn find(name: &str) -> Option<&'static EndpointBinding> {
    CATALOG.iter().find(|binding| binding.name == name)
}
