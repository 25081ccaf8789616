// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [schema.org](http://schema.org/) vocabulary.

use crate::named_node;

pub const NS_BASE: &str = "http://schema.org/";
pub const NS_PREFERRED_PREFIX: &str = "schema";

named_node!(
    START_DATE,
    NS_BASE,
    "startDate",
    "The start date and time of the item (in ISO 8601 date format)."
);
named_node!(
    END_DATE,
    NS_BASE,
    "endDate",
    "The end date and time of the item (in ISO 8601 date format)."
);
