// SPDX-FileCopyrightText: 2024 Robin Vobruba <hoijui.quaero@gmail.com>
//
// SPDX-License-Identifier: AGPL-3.0-or-later

use datacat_model::{Owner, SiteUrls, User};
use sha2::{Digest, Sha256};

use crate::RequestContext;

const GRAVATAR_SECURE: &str = "https://secure.gravatar.com/avatar/";
const GRAVATAR_PLAIN: &str = "http://www.gravatar.com/avatar/";

pub(crate) fn escape_attr(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for chr in value.chars() {
        match chr {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// The site-local path of a static file.
#[must_use]
pub fn static_url(filename: &str) -> String {
    SiteUrls::static_path(filename)
}

/// `url` if there is one, the placeholder image called `name` otherwise.
#[must_use]
pub fn placeholder(url: Option<&str>, name: &str) -> String {
    url.filter(|url| !url.is_empty()).map_or_else(
        || static_url(&format!("img/placeholders/{name}.png")),
        ToOwned::to_owned,
    )
}

/// The Gravatar image URL for an e-mail address.
#[must_use]
pub fn gravatar(email: &str, size: u32, secure: bool) -> String {
    let hash = Sha256::digest(email.trim().to_lowercase().as_bytes());
    let base = if secure {
        GRAVATAR_SECURE
    } else {
        GRAVATAR_PLAIN
    };
    format!("{base}{hash:x}?s={size}&d=identicon")
}

/// The explicitly set avatar of the user,
/// else their Gravatar (if they have an e-mail address),
/// else a placeholder.
#[must_use]
pub fn avatar_url(user: &User, size: u32, ctx: &RequestContext) -> String {
    if let Some(avatar_url) = user.avatar_url.as_deref().filter(|url| !url.is_empty()) {
        avatar_url.to_owned()
    } else if let Some(email) = user.email.as_deref().filter(|email| !email.is_empty()) {
        gravatar(email, size, ctx.secure)
    } else {
        placeholder(None, "user")
    }
}

#[must_use]
pub fn owner_avatar_url(owner: Option<&Owner>, size: u32, ctx: &RequestContext) -> String {
    match owner {
        Some(Owner::Organization(org)) => placeholder(org.image_url.as_deref(), "organization"),
        Some(Owner::User(user)) => avatar_url(user, size, ctx),
        None => placeholder(None, "user"),
    }
}

/// The site-local path of the owner's page,
/// or an empty string if there is no owner.
#[must_use]
pub fn owner_url(owner: Option<&Owner>) -> String {
    match owner {
        Some(Owner::Organization(org)) => SiteUrls::organization_path(org.id),
        Some(Owner::User(user)) => SiteUrls::user_path(user.id),
        None => String::new(),
    }
}

#[must_use]
pub fn owner_name(owner: Option<&Owner>) -> &str {
    owner.map_or("", Owner::name)
}

fn avatar_markup(url: &str, title: &str, avatar_url: &str, size: u32) -> String {
    format!(
        r#"<a class="avatar" href="{url}" title="{title}"><img src="{avatar_url}" class="avatar" width="{size}" height="{size}"/></a>"#,
        url = escape_attr(url),
        title = escape_attr(title),
        avatar_url = escape_attr(avatar_url),
    )
}

/// A linked avatar image of the user.
#[must_use]
pub fn avatar(user: &User, size: u32, ctx: &RequestContext) -> String {
    avatar_markup(
        &SiteUrls::user_path(user.id),
        &user.fullname,
        &avatar_url(user, size, ctx),
        size,
    )
}

/// A linked avatar image of the owner (organization or user).
#[must_use]
pub fn owner_avatar(owner: Option<&Owner>, size: u32, ctx: &RequestContext) -> String {
    avatar_markup(
        &owner_url(owner),
        owner_name(owner),
        &owner_avatar_url(owner, size, ctx),
        size,
    )
}
