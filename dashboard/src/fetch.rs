use serde::de::DeserializeOwned;
use std::sync::Arc;
use wificore::buildings::{AccessPoint, ApLocations, BuildingDocument, BuildingIndex};
use wificore::SimulationSnapshot;

const DATA_HOST: &str = "http://127.0.0.1:9000";
const SNAPSHOT_PATH: &str = "/tamu_simulation_output.json";
const BUILDING_INDEX_PATH: &str = "/data/micro-analysis/buildings/buildings_index.json";
const AP_LOCATIONS_PATH: &str = "/data/micro-analysis/access-points/ap_locations.json";

/// A building document with its access points, loaded together.
#[derive(Debug)]
pub struct BuildingData {
    pub document: BuildingDocument,
    pub access_points: Vec<AccessPoint>,
}

/// Transport failure, with missing documents kept apart from everything else.
#[derive(Debug, Clone, PartialEq)]
enum FetchError {
    NotFound(String),
    Other(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::NotFound(path) => write!(f, "404 Not Found: {}", path),
            FetchError::Other(message) => f.write_str(message),
        }
    }
}

async fn get_bytes(path: &str) -> Result<Vec<u8>, FetchError> {
    let response = reqwest::get(format!("{DATA_HOST}{path}"))
        .await
        .map_err(|e| FetchError::Other(e.to_string()))?;
    let status = response.status();
    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(FetchError::NotFound(path.to_string()));
    }
    if !status.is_success() {
        return Err(FetchError::Other(format!("{}: {}", status, path)));
    }
    response
        .bytes()
        .await
        .map(|bytes| bytes.to_vec())
        .map_err(|e| FetchError::Other(e.to_string()))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, FetchError> {
    let bytes = get_bytes(path).await?;
    serde_json::from_slice(&bytes).map_err(|e| FetchError::Other(format!("{}: {}", path, e)))
}

fn building_error(id: &str, err: FetchError) -> String {
    match err {
        FetchError::NotFound(_) => format!("Building data not found: {id}"),
        FetchError::Other(message) => format!("Building {id}: {message}"),
    }
}

fn locations_error(err: FetchError) -> String {
    match err {
        FetchError::NotFound(_) => "AP locations not found".to_string(),
        FetchError::Other(message) => format!("AP locations: {message}"),
    }
}

/// Single attempt; validation failures are reported like transport errors.
pub async fn fetch_snapshot() -> Result<Arc<SimulationSnapshot>, String> {
    let bytes = get_bytes(SNAPSHOT_PATH).await.map_err(|e| e.to_string())?;
    SimulationSnapshot::from_json_slice(&bytes)
        .map(Arc::new)
        .map_err(|e| e.to_string())
}

pub async fn fetch_building_index() -> Result<BuildingIndex, String> {
    get_json(BUILDING_INDEX_PATH)
        .await
        .map_err(|e| e.to_string())
}

pub async fn fetch_building(id: String) -> Result<Arc<BuildingData>, String> {
    let document_path = format!("/data/micro-analysis/buildings/{id}.json");
    let (document, locations) = tokio::join!(
        get_json::<BuildingDocument>(&document_path),
        get_json::<ApLocations>(AP_LOCATIONS_PATH)
    );
    let mut document = document.map_err(|e| building_error(&id, e))?;
    let locations = locations.map_err(locations_error)?;
    let access_points = locations
        .for_building(&id)
        .map_err(|e| e.to_string())?
        .access_points
        .clone();

    document.deduplicate_floors();
    Ok(Arc::new(BuildingData {
        document,
        access_points,
    }))
}
