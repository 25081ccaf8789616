// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [Friend of a Friend (FOAF)](
//! http://xmlns.com/foaf/0.1/)
//! vocabulary.

use crate::named_node;

pub const NS_BASE: &str = "http://xmlns.com/foaf/0.1/";
pub const NS_PREFERRED_PREFIX: &str = "foaf";

named_node!(ORGANIZATION, NS_BASE, "Organization", "An organization.");
named_node!(
    PERSON,
    NS_BASE,
    "Person",
    "A person."
);
named_node!(NAME, NS_BASE, "name", "A name for some thing.");
