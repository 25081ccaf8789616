// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

//! [SPDX](http://spdx.org/rdf/terms) vocabulary,
//! the parts of it relevant for file checksums.

use crate::named_node;

pub const NS_BASE: &str = "http://spdx.org/rdf/terms#";
pub const NS_PREFERRED_PREFIX: &str = "spdx";

/// Common prefix of the local names of all checksum algorithm individuals,
/// e.g. `checksumAlgorithm_sha1`.
pub const CHECKSUM_ALGORITHM_PREFIX: &str = "checksumAlgorithm_";

named_node!(
    CHECKSUM,
    NS_BASE,
    "Checksum",
    "A Checksum is value that allows the contents of a file to be authenticated."
);
named_node!(
    HAS_CHECKSUM,
    NS_BASE,
    "checksum",
    "The checksum property provides a mechanism that can be used to verify that the contents of a File or Package have not changed."
);
named_node!(
    ALGORITHM,
    NS_BASE,
    "algorithm",
    "Identifies the algorithm used to produce the subject Checksum."
);
named_node!(
    CHECKSUM_VALUE,
    NS_BASE,
    "checksumValue",
    "The checksumValue property provides a lower case hexidecimal encoded digest value produced using a specific algorithm."
);
named_node!(
    CHECKSUM_ALGORITHM_SHA1,
    NS_BASE,
    "checksumAlgorithm_sha1",
    "Indicates the algorithm used was SHA-1"
);
named_node!(
    CHECKSUM_ALGORITHM_SHA256,
    NS_BASE,
    "checksumAlgorithm_sha256",
    "Indicates the algorithm used was SHA256"
);
named_node!(
    CHECKSUM_ALGORITHM_MD5,
    NS_BASE,
    "checksumAlgorithm_md5",
    "Indicates the algorithm used was MD5"
);
