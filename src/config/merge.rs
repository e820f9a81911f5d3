//! Key-granular merging of configuration layers

use super::value::Value;
use std::collections::BTreeMap;

/// Flat key-value map parsed from a single source.
pub type Layer = BTreeMap<String, Value>;

/// Overlay `layer` onto `acc`. Keys in `layer` replace existing entries;
/// keys only present in `acc` are kept.
pub fn merge_layer(acc: &mut Layer, layer: Layer) {
    acc.extend(layer);
}

/// Fold layers in order, least specific first.
pub fn merge_layers<I>(layers: I) -> Layer
where
    I: IntoIterator<Item = Layer>,
{
    layers.into_iter().fold(Layer::new(), |mut acc, layer| {
        merge_layer(&mut acc, layer);
        acc
    })
}
