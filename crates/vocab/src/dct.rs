// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [DCMI Metadata Terms](
//! http://purl.org/dc/terms/)
//! vocabulary.

use crate::named_node;

pub const NS_BASE: &str = "http://purl.org/dc/terms/";
pub const NS_PREFERRED_PREFIX: &str = "dct";

named_node!(TITLE, NS_BASE, "title", "A name given to the resource.");
named_node!(
    DESCRIPTION,
    NS_BASE,
    "description",
    "An account of the resource."
);
named_node!(
    IDENTIFIER,
    NS_BASE,
    "identifier",
    "An unambiguous reference to the resource within a given context."
);
named_node!(
    ISSUED,
    NS_BASE,
    "issued",
    "Date of formal issuance of the resource."
);
named_node!(
    MODIFIED,
    NS_BASE,
    "modified",
    "Date on which the resource was changed."
);
named_node!(
    TEMPORAL,
    NS_BASE,
    "temporal",
    "Temporal characteristics of the resource."
);
named_node!(
    PERIOD_OF_TIME,
    NS_BASE,
    "PeriodOfTime",
    "An interval of time that is named or defined by its start and end dates."
);
named_node!(
    PUBLISHER,
    NS_BASE,
    "publisher",
    "An entity responsible for making the resource available."
);
named_node!(
    LICENSE,
    NS_BASE,
    "license",
    "A legal document giving official permission to do something with the resource."
);
named_node!(
    RIGHTS,
    NS_BASE,
    "rights",
    "Information about rights held in and over the resource."
);
named_node!(
    FORMAT,
    NS_BASE,
    "format",
    "The file format, physical medium, or dimensions of the resource."
);
