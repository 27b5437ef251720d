//! Path splitting and absoluteness for POSIX and Windows paths
//!
//! Thin adapter over `typed-path` so that either flavor can be handled on any
//! host. A Windows prefix followed by a root (`C:\`, `\\server\share\`) is
//! reported as a single first segment. UNC and verbatim prefixes are volumes in
//! their own right, so they always carry the trailing separator and make the
//! path absolute.

use crate::config::PathFlavor;
use std::borrow::Cow;
use typed_path::{
    Utf8Component, Utf8UnixPath, Utf8WindowsComponent, Utf8WindowsPath, Utf8WindowsPrefix,
};

/// Split a path into its ordered segments
pub fn split_segments(path: &str, flavor: PathFlavor) -> Vec<Cow<'_, str>> {
    match flavor {
        PathFlavor::Posix => Utf8UnixPath::new(path)
            .components()
            .map(|component| Cow::Borrowed(component.as_str()))
            .collect(),
        PathFlavor::Windows => split_windows(path),
    }
}

fn split_windows(path: &str) -> Vec<Cow<'_, str>> {
    let mut segments = Vec::new();
    let mut components = Utf8WindowsPath::new(path).components().peekable();

    while let Some(component) = components.next() {
        match component {
            Utf8WindowsComponent::Prefix(prefix) => {
                let has_root = matches!(components.peek(), Some(Utf8WindowsComponent::RootDir));
                if has_root {
                    components.next();
                }
                if has_root || is_volume_prefix(&prefix.kind()) {
                    segments.push(Cow::Owned(format!("{}\\", prefix.as_str())));
                } else {
                    segments.push(Cow::Borrowed(prefix.as_str()));
                }
            }
            other => segments.push(Cow::Borrowed(other.as_str())),
        }
    }

    segments
}

/// Whether the path is absolute under the given flavor's rules
pub fn is_absolute(path: &str, flavor: PathFlavor) -> bool {
    match flavor {
        PathFlavor::Posix => Utf8UnixPath::new(path).is_absolute(),
        PathFlavor::Windows => {
            let path = Utf8WindowsPath::new(path);
            path.is_absolute()
                || matches!(
                    path.components().next(),
                    Some(Utf8WindowsComponent::Prefix(prefix)) if is_volume_prefix(&prefix.kind())
                )
        }
    }
}

/// Every prefix except a plain drive (`C:`) names a complete volume
fn is_volume_prefix(kind: &Utf8WindowsPrefix<'_>) -> bool {
    !matches!(kind, Utf8WindowsPrefix::Disk(_))
}

/// A segment of the form `X:\` with an uppercase ASCII drive letter
pub fn is_drive_letter(segment: &str) -> bool {
    matches!(
        segment.as_bytes(),
        [letter, b':', b'\\' | b'/', ..] if letter.is_ascii_uppercase()
    )
}
