//! Data Transfer Objects (DTOs) for the HTTP API contract.
//!
//! These types define the stable JSON contract with explicit serialization
//! control. They decouple internal domain types from the external API
//! representation; all visibility decisions (which properties appear on the
//! wire) are made here.

pub mod entity;
pub mod network;

pub use entity::{
    CreateEntityRequest, CreateInteractionRequest, EntityReferenceDto, InteractionDto,
    PositionDto, SimplePhysicalEntityDto, XrefDto,
};
pub use network::{EdgeDto, NetworkDto, NodeDto};
