//! Post-processing hooks run on freshly decoded definitions.

use cachemodel_decode::ModelDefinition;

/// Derived-data computations applied after decoding.
///
/// The loader calls the methods in declaration order, once per successful
/// decode and before the definition is cached. Each hook may fill in
/// [`ModelDefinition::derived`].
pub trait PostProcess: Send + Sync {
    fn compute_normals(&self, _definition: &mut ModelDefinition) {}

    fn compute_texture_uv_coordinates(&self, _definition: &mut ModelDefinition) {}

    fn compute_animation_tables(&self, _definition: &mut ModelDefinition) {}
}

/// Leaves definitions untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoPostProcess;

impl PostProcess for NoPostProcess {}

pub(crate) fn run_all<H: PostProcess + ?Sized>(hooks: &H, definition: &mut ModelDefinition) {
    hooks.compute_normals(definition);
    hooks.compute_texture_uv_coordinates(definition);
    hooks.compute_animation_tables(definition);
}
