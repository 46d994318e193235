use serde::{Deserialize, Serialize};

use crate::core::{Activity, Orientation, TimelineScene, ZoomTransform};
use crate::error::{TimelineError, TimelineResult};
use crate::render::Renderer;
use crate::store::TimelineState;

use super::Timeline;

pub const TIMELINE_STATE_JSON_SCHEMA_V1: u32 = 1;
pub const TIMELINE_SCENE_JSON_SCHEMA_V1: u32 = 1;

/// Portable view of one state snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStateSummary {
    pub data: Vec<Activity>,
    pub width: f64,
    pub height: f64,
    pub time_orientation: Orientation,
    pub time_domain: (f64, f64),
    pub time_range: (f64, f64),
    pub zoom: ZoomTransform,
    pub resources: Vec<String>,
    pub bandwidth: f64,
    pub dragging: Option<String>,
}

impl From<&TimelineState> for TimelineStateSummary {
    fn from(state: &TimelineState) -> Self {
        let time_scale = state.time_scale();
        let band_scale = state.band_scale();
        Self {
            data: state.data().to_vec(),
            width: state.view().width,
            height: state.view().height,
            time_orientation: state.time_orientation(),
            time_domain: time_scale.domain(),
            time_range: time_scale.range(),
            zoom: time_scale.transform(),
            resources: band_scale
                .domain()
                .iter()
                .map(|key| key.as_str().to_owned())
                .collect(),
            bandwidth: band_scale.bandwidth(),
            dragging: state.drag_event().map(|drag| drag.id.as_str().to_owned()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineStateJsonContractV1 {
    pub schema_version: u32,
    pub state: TimelineStateSummary,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimelineSceneJsonContractV1<'a> {
    pub schema_version: u32,
    pub scene: &'a TimelineScene,
}

impl TimelineStateSummary {
    pub fn to_json_contract_v1_pretty(&self) -> TimelineResult<String> {
        let payload = TimelineStateJsonContractV1 {
            schema_version: TIMELINE_STATE_JSON_SCHEMA_V1,
            state: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            TimelineError::InvalidData(format!("failed to serialize state contract v1: {e}"))
        })
    }

    /// Accepts both the bare summary and the versioned contract.
    pub fn from_json_compat_str(input: &str) -> TimelineResult<Self> {
        if let Ok(summary) = serde_json::from_str::<TimelineStateSummary>(input) {
            return Ok(summary);
        }
        let payload: TimelineStateJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            TimelineError::InvalidData(format!("failed to parse state json payload: {e}"))
        })?;
        if payload.schema_version != TIMELINE_STATE_JSON_SCHEMA_V1 {
            return Err(TimelineError::InvalidData(format!(
                "unsupported state schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.state)
    }
}

impl TimelineScene {
    pub fn to_json_contract_v1_pretty(&self) -> TimelineResult<String> {
        let payload = TimelineSceneJsonContractV1 {
            schema_version: TIMELINE_SCENE_JSON_SCHEMA_V1,
            scene: self,
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            TimelineError::InvalidData(format!("failed to serialize scene contract v1: {e}"))
        })
    }
}

impl<R: Renderer> Timeline<R> {
    #[must_use]
    pub fn state_summary(&self) -> TimelineStateSummary {
        TimelineStateSummary::from(self.state().as_ref())
    }

    pub fn state_json_contract_v1_pretty(&self) -> TimelineResult<String> {
        self.state_summary().to_json_contract_v1_pretty()
    }

    pub fn scene_json_contract_v1_pretty(&mut self) -> TimelineResult<String> {
        self.scene().to_json_contract_v1_pretty()
    }
}
