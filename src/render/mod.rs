//! HTML for the download index.

pub mod html;

use crate::artifacts::{latest_links, version_dir_href};
use crate::models::ListingMode;
use crate::repository::ReleaseListing;
use html::Html;

/// Fixed navigation shown on every page
pub const SIDEBAR_LINKS: [(&str, &str); 6] = [
    ("Project home", "https://github.com/ytdl-org/youtube-dl"),
    (
        "Documentation",
        "https://github.com/ytdl-org/youtube-dl/blob/master/README.md",
    ),
    (
        "FAQ",
        "https://github.com/ytdl-org/youtube-dl/blob/master/README.md#faq",
    ),
    (
        "Supported sites",
        "https://ytdl-org.github.io/youtube-dl/supportedsites.html",
    ),
    ("Bug tracker", "https://github.com/ytdl-org/youtube-dl/issues"),
    (
        "Changelog",
        "https://github.com/ytdl-org/youtube-dl/blob/master/ChangeLog",
    ),
];

/// Inputs for one render of the index page
pub struct IndexPage<'a> {
    pub title: &'a str,
    pub base_path: &'a str,
    pub mode: ListingMode,
    pub listing: &'a ReleaseListing,
}

pub fn render_index(page: &IndexPage<'_>) -> String {
    let mut html = Html::new();
    open_document(&mut html, page.title);

    html.raw("<h1>").text(page.title).raw(" downloads</h1>\n");

    match &page.listing.latest {
        Some(latest) => {
            html.raw("<div id=\"latest\">\n<h2>Latest version: ")
                .text(latest.as_str())
                .raw("</h2>\n<ul>\n");
            for link in latest_links(page.base_path, page.mode, latest) {
                html.raw("<li>")
                    .link(&link.href, &link.file_name)
                    .raw(" (")
                    .text(link.kind.label())
                    .raw(")</li>\n");
            }
            html.raw("</ul>\n</div>\n");
        }
        None => {
            html.raw("<div id=\"latest\" class=\"empty\">\n<p>No releases available.</p>\n</div>\n");
        }
    }

    if let Some(versions) = page.listing.versions.as_deref() {
        if !versions.is_empty() {
            html.raw("<h2>All versions</h2>\n<ul id=\"versions\">\n");
            for version in versions {
                html.raw("<li>")
                    .link(&version_dir_href(page.base_path, version), version.as_str())
                    .raw("</li>\n");
            }
            html.raw("</ul>\n");
        }
    }

    close_document(&mut html);
    html.into_string()
}

/// Page served when the release source cannot be read
pub fn render_unavailable(title: &str) -> String {
    let mut html = Html::new();
    open_document(&mut html, title);
    html.raw("<h1>").text(title).raw(" downloads</h1>\n");
    html.raw("<div id=\"latest\" class=\"error\">\n<p>The release listing is currently unavailable. Please try again later.</p>\n</div>\n");
    close_document(&mut html);
    html.into_string()
}

fn open_document(html: &mut Html, title: &str) {
    html.raw("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>")
        .text(title)
        .raw(" downloads</title>\n</head>\n<body>\n<div id=\"sidebar\">\n<ul>\n");
    for (label, href) in SIDEBAR_LINKS {
        html.raw("<li>").link(href, label).raw("</li>\n");
    }
    html.raw("</ul>\n</div>\n<div id=\"content\">\n");
}

fn close_document(html: &mut Html) {
    html.raw("</div>\n</body>\n</html>\n");
}
