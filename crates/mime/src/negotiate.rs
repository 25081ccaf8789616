// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use mediatype::{MediaType, MediaTypeList, Name, ReadParams};

use crate::Type;

const PARAM_QUALITY: Name<'static> = Name::new_unchecked("q");
const WILDCARD: &str = "*";

fn quality(media_type: &MediaType) -> f32 {
    media_type
        .get_param(PARAM_QUALITY)
        .and_then(|value| value.as_str().trim_matches('"').parse::<f32>().ok())
        .unwrap_or(1.0)
}

/// Chooses the format to serve, given the value of an HTTP `Accept` header.
///
/// Entries are ranked by their `q` weight;
/// among equally weighted entries, the one listed first wins.
/// Wildcards, unparsable entries and non-RDF types are skipped.
/// If nothing usable remains, the default format
/// (see [`Type::default`]) is chosen.
#[must_use]
pub fn negotiate(accept: Option<&str>) -> Type {
    let Some(accept) = accept else {
        return Type::default();
    };

    let mut best: Option<(f32, Type)> = None;
    for media_type_res in MediaTypeList::new(accept) {
        let media_type = match media_type_res {
            Ok(media_type) => media_type,
            Err(err) => {
                tracing::debug!("Skipping unparsable entry in Accept header '{accept}': {err}");
                continue;
            }
        };
        if media_type.ty.as_str() == WILDCARD || media_type.subty.as_str() == WILDCARD {
            continue;
        }
        let weight = quality(&media_type);
        if weight <= 0.0 {
            continue;
        }
        let Ok(typ) = Type::from_media_type(&media_type) else {
            continue;
        };
        if best.map_or(true, |(best_weight, _)| weight > best_weight) {
            best = Some((weight, typ));
        }
    }

    best.map(|(_, typ)| typ).unwrap_or_default()
}
