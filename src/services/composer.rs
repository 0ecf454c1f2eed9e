//! Layer composition: keymap + board geometry + keycode database →
//! renderable key descriptors.

use tracing::debug;

use crate::error::{Error, Result};
use crate::keycode_db::KeycodeDb;
use crate::models::{BoardGeometry, KeymapDocument, RenderableKey};

/// Composes one layer of a keymap into an ordered sequence of renderable
/// keys.
///
/// For each position, the geometry key is paired with the layer's keycode
/// token at the same index, the token is resolved into a display label, and
/// the placement is normalized into 0-1 render space. Output order equals
/// geometry key order. The result is recomputed on every call and never
/// cached; it is meant to be handed straight to a rendering collaborator.
///
/// # Errors
///
/// - [`Error::LayerIndexOutOfRange`] when `layer_index` is past the last
///   layer.
/// - [`Error::UnknownLayoutVariant`] when the keymap names a variant the
///   board does not define.
/// - [`Error::LayoutMismatch`] when the layer's token count differs from
///   the variant's key count. The check runs before any key is resolved,
///   so no partial output is ever produced.
/// - [`Error::MalformedToken`] when a token fails to parse.
pub fn compose_layer(
    doc: &KeymapDocument,
    board: &BoardGeometry,
    db: &KeycodeDb,
    layer_index: usize,
) -> Result<Vec<RenderableKey>> {
    let layer = doc
        .layers
        .get(layer_index)
        .ok_or(Error::LayerIndexOutOfRange {
            index: layer_index,
            layer_count: doc.layer_count(),
        })?;

    let keys = board.keys_for(&doc.layout)?;
    if layer.len() != keys.len() {
        return Err(Error::LayoutMismatch {
            layer: layer_index,
            tokens: layer.len(),
            keys: keys.len(),
        });
    }

    let rendered = keys
        .iter()
        .zip(layer)
        .map(|(geometry, token)| {
            let label = db.resolve(token)?;
            Ok(RenderableKey::from_geometry(geometry, label))
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(
        layer = layer_index,
        keys = rendered.len(),
        layout = %doc.layout,
        "composed layer"
    );
    Ok(rendered)
}
