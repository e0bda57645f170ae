//! Entity handlers - CRUD operations on the working document.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use factoid_core::{Interaction, SimplePhysicalEntity};

use crate::dto::{
    CreateEntityRequest, CreateInteractionRequest, InteractionDto, SimplePhysicalEntityDto,
};
use crate::error::HttpError;
use crate::state::AppState;

/// List all entities.
pub async fn list(
    State(state): State<AppState>,
) -> Result<Json<Vec<SimplePhysicalEntityDto>>, HttpError> {
    let entities = state.store.entities().await;
    Ok(Json(
        entities.iter().map(SimplePhysicalEntityDto::from).collect(),
    ))
}

/// Get a single entity by id.
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SimplePhysicalEntityDto>, HttpError> {
    let entity = state.store.entity(id).await?;
    Ok(Json(SimplePhysicalEntityDto::from(&entity)))
}

/// Add a new entity.
pub async fn add(
    State(state): State<AppState>,
    Json(req): Json<CreateEntityRequest>,
) -> Result<Json<SimplePhysicalEntityDto>, HttpError> {
    let mut entity = SimplePhysicalEntity::new(req.name, req.kind);
    entity.entity_reference = req.entity_reference;
    entity.cellular_location = req.cellular_location;
    entity.position = req.position;

    let dto = SimplePhysicalEntityDto::from(&entity);
    state.store.add_entity(entity).await;
    Ok(Json(dto))
}

/// Remove an entity.
pub async fn remove(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<(), HttpError> {
    state.store.remove_entity(id).await?;
    Ok(())
}

/// Add an interaction between existing entities.
pub async fn add_interaction(
    State(state): State<AppState>,
    Json(req): Json<CreateInteractionRequest>,
) -> Result<Json<InteractionDto>, HttpError> {
    let interaction = Interaction::new(req.name, req.participants);
    let dto = InteractionDto::from(&interaction);
    state.store.add_interaction(interaction).await?;
    Ok(Json(dto))
}
