pub mod assign_json;

pub use assign_json::{
    assign, assign_json, assign_json_with_provider, assign_with_config, recommend_json,
    resolve_roster, AssignRequest, AssignResponse, RecommendRequest, RecommendResponse,
    RosterEntry, SCHEMA_VERSION,
};
