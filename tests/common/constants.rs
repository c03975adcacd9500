//! Shared constants for end-to-end tests
//!
//! When the fixture catalog changes, update only this file and fixtures.rs.

#![allow(dead_code)]

// ============================================================================
// Test Users
// ============================================================================

pub const SELLER_ID: u64 = 7;

// ============================================================================
// Test Catalog IDs
// ============================================================================

/// "Radiohead"
pub const ARTIST_1_ID: u64 = 1;

/// "Portishead"
pub const ARTIST_2_ID: u64 = 2;

/// "OK Computer" by Radiohead
pub const ALBUM_1_ID: u64 = 10;

/// "Kid A" by Radiohead
pub const ALBUM_2_ID: u64 = 11;

/// "Dummy" by Portishead
pub const ALBUM_3_ID: u64 = 20;

/// OK Computer, UK vinyl press with one item
pub const RELEASE_1_ID: u64 = 100;

/// OK Computer, cassette with two items
pub const RELEASE_2_ID: u64 = 101;

/// Kid A, CD with no items yet
pub const RELEASE_3_ID: u64 = 110;

/// Dummy, vinyl with one item
pub const RELEASE_4_ID: u64 = 200;

pub const ITEM_1_ID: u64 = 1000;
pub const ITEM_2_ID: u64 = 1010;
pub const ITEM_3_ID: u64 = 1011;
pub const ITEM_4_ID: u64 = 2000;

pub const ALL_RELEASES: [(u64, u64, u64); 4] = [
    (RELEASE_1_ID, ARTIST_1_ID, ALBUM_1_ID),
    (RELEASE_2_ID, ARTIST_1_ID, ALBUM_1_ID),
    (RELEASE_3_ID, ARTIST_1_ID, ALBUM_2_ID),
    (RELEASE_4_ID, ARTIST_2_ID, ALBUM_3_ID),
];
