use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use relief_model::{DatasetSummary, DistrictDetail, DistrictRecord, DistrictView, Overview};
use relief_store::{district_views, overview, summarize};

use crate::state::SharedState;
use crate::types::{api_error, ApiResult};

/// How many districts the overview lists.
const OVERVIEW_LIMIT: usize = 10;

pub async fn get_districts(State(st): State<SharedState>) -> Json<Vec<DistrictRecord>> {
    Json(st.store.snapshot().to_vec())
}

pub async fn get_district_views(State(st): State<SharedState>) -> Json<Vec<DistrictView>> {
    Json(district_views(&st.store.snapshot()))
}

pub async fn get_district(
    State(st): State<SharedState>,
    Path(id): Path<u64>,
) -> ApiResult<Json<DistrictDetail>> {
    st.store
        .get(id)
        .map(|r| Json(DistrictDetail::from(r)))
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "District not found"))
}

pub async fn get_summary(State(st): State<SharedState>) -> ApiResult<Json<DatasetSummary>> {
    summarize(&st.store.snapshot())
        .map(Json)
        .map_err(|e| api_error(StatusCode::NOT_FOUND, e.to_string()))
}

pub async fn get_overview(State(st): State<SharedState>) -> Json<Overview> {
    Json(overview(&st.store.snapshot(), OVERVIEW_LIMIT))
}
