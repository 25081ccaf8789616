// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [Data Catalog Vocabulary (DCAT)](
//! http://www.w3.org/ns/dcat)
//! vocabulary.

use crate::named_node;

pub const NS_BASE: &str = "http://www.w3.org/ns/dcat#";
pub const NS_PREFERRED_PREFIX: &str = "dcat";

named_node!(
    DATASET,
    NS_BASE,
    "Dataset",
    "A collection of data, published or curated by a single agent, and available for access or download in one or more representations."
);
named_node!(
    DISTRIBUTION,
    NS_BASE,
    "Distribution",
    "A specific representation of a dataset."
);
named_node!(
    HAS_DISTRIBUTION,
    NS_BASE,
    "distribution",
    "An available distribution of the dataset."
);
named_node!(
    KEYWORD,
    NS_BASE,
    "keyword",
    "A keyword or tag describing a resource."
);
named_node!(
    THEME,
    NS_BASE,
    "theme",
    "A main category of the resource. A resource can have multiple themes."
);
named_node!(
    DOWNLOAD_URL,
    NS_BASE,
    "downloadURL",
    "The URL of the downloadable file in a given format."
);
named_node!(
    ACCESS_URL,
    NS_BASE,
    "accessURL",
    "A URL of a resource that gives access to a distribution of the dataset."
);
named_node!(
    BYTE_SIZE,
    NS_BASE,
    "byteSize",
    "The size of a distribution in bytes."
);
named_node!(
    BYTES_SIZE,
    NS_BASE,
    "bytesSize",
    "The size of a distribution in bytes (legacy spelling, still emitted by many catalogs)."
);
named_node!(
    MEDIA_TYPE,
    NS_BASE,
    "mediaType",
    "The media type of the distribution as defined by IANA."
);
named_node!(
    START_DATE,
    NS_BASE,
    "startDate",
    "The start of the period."
);
named_node!(END_DATE, NS_BASE, "endDate", "The end of the period.");
