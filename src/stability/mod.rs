//! Surface-layer stability formulations.
//!
//! Two families live here:
//! - [`phi`]: similarity correction functions φ_m/φ_h for the flux-profile
//!   relationships, selectable by [`StabilityVariant`].
//! - [`richardson`]: conversion between the bulk Richardson number and the
//!   dimensionless stability parameter ζ, selectable by
//!   [`RichardsonRelation`].

pub mod phi;
pub mod richardson;

pub use phi::{BeljaarsHoltslagParams, ShebaParams, StabilityVariant};
pub use richardson::{Em95Params, Gf96Params, RichardsonRelation, rb_shear};
