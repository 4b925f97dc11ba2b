use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::voice::VoiceModel;

#[derive(Debug, Serialize, Deserialize)]
pub struct VoicesResponse {
    pub default: VoiceModel,
    pub voices: Vec<VoiceModel>,
}

pub struct VoiceController {
    default_voice: VoiceModel,
}

impl VoiceController {
    pub fn new(default_voice: VoiceModel) -> Self {
        Self { default_voice }
    }

    /// GET /api/voices - List the voice models a transcript can be read with
    pub async fn list_voices(State(controller): State<Arc<VoiceController>>) -> Json<VoicesResponse> {
        Json(VoicesResponse {
            default: controller.default_voice,
            voices: VoiceModel::ALL.to_vec(),
        })
    }
}
