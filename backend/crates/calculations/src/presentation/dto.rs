//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use kernel::id::{CalculationId, UserId};
use kernel::page::PageParams;
use serde::{Deserialize, Serialize};

use crate::application::create_calculation::CreateCalculationInput;
use crate::application::list_calculations::ListCalculationsInput;
use crate::application::update_calculation::UpdateCalculationInput;
use crate::domain::entities::Calculation;
use crate::domain::value_objects::CalculationType;

/// Request for POST /calculations
///
/// `type` stays a string here so that an unknown tag is reported by the
/// resolver rather than as a generic body error.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationCreateRequest {
    pub a: f64,
    pub b: f64,
    #[serde(rename = "type")]
    pub calc_type: String,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

impl From<CalculationCreateRequest> for CreateCalculationInput {
    fn from(req: CalculationCreateRequest) -> Self {
        Self {
            a: req.a,
            b: req.b,
            calc_type: req.calc_type,
            user_id: req.user_id,
        }
    }
}

/// Request for PUT /calculations/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct CalculationUpdateRequest {
    pub a: f64,
    pub b: f64,
    #[serde(rename = "type")]
    pub calc_type: String,
}

impl From<CalculationUpdateRequest> for UpdateCalculationInput {
    fn from(req: CalculationUpdateRequest) -> Self {
        Self {
            a: req.a,
            b: req.b,
            calc_type: req.calc_type,
        }
    }
}

/// Query for GET /calculations
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ListCalculationsQuery {
    pub user_id: Option<UserId>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl From<ListCalculationsQuery> for ListCalculationsInput {
    fn from(query: ListCalculationsQuery) -> Self {
        Self {
            user_id: query.user_id,
            page: PageParams {
                offset: query.offset,
                limit: query.limit,
            },
        }
    }
}

/// Calculation as returned by every calculation endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CalculationResponse {
    pub id: CalculationId,
    pub a: f64,
    pub b: f64,
    #[serde(rename = "type")]
    pub calc_type: CalculationType,
    pub result: Option<f64>,
    pub user_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl From<Calculation> for CalculationResponse {
    fn from(c: Calculation) -> Self {
        Self {
            id: c.id,
            a: c.a,
            b: c.b,
            calc_type: c.calc_type,
            result: c.result,
            user_id: c.user_id,
            created_at: c.created_at,
        }
    }
}
