// src/config/consts.rs

// Wiki
pub const WIKI_API: &str = "https://www.pcgamingwiki.com/api/appid.php";
pub const NETWORK_FRAGMENT: &str = "#Network";
pub const USER_AGENT: &str = "steam_flags/0.1";

// Wiki page structure
pub const ROW_CLASS: &str = "table-network-multiplayer-body-row";
pub const PLAYERS_CLASS: &str = "table-network-multiplayer-body-players";
pub const RATING_CLASS: &str = "table-network-multiplayer-body-rating";
pub const INFOBOX_TITLE_CLASS: &str = "template-infobox-title";

// Store page
pub const STORE_HOST: &str = "store.steampowered.com";
pub const STORE_APP_SEGMENT: &str = "app";
pub const FEATURES_LIST_CLASS: &str = "game_area_features_list_ctn";

/// Store tags that the wiki rows supersede once LAN or Online data is known.
pub const LEGACY_TAGS: [&str; 6] = [
    "Online PvP",
    "Shared/Split Screen PvP",
    "Online Co-op",
    "Shared/Split Screen Co-op",
    "LAN PvP",
    "LAN Co-op",
];

pub const UNKNOWN: &str = "Unknown";
pub const TOGGLE_MENU_TITLE: &str = "Toggle Multiplayer Info";

// Local files
pub const STORE_DIR: &str = ".store";
pub const PREFS_FILE: &str = "prefs.json";
pub const OPTIONS_FILE: &str = "options.json";
pub const LOG_FILE: &str = "debug.log";

// Icons (PNG, base64)
pub const INFO_ICON_B64: &str = "iVBORw0KGgoAAAANSUhEUgAAADQAAAAgCAQAAAD3NpPtAAABrElEQVR42u2WoY7CQBRFNwSBqKqoIGlIampImtQQFKIGh6pANqnpF6BXoNC4/YD9BD4Av4pPqCHBVOHObiaTyUw7TaawOM5zb/J6O3duJ/148+YhSPjiQk3ND0fiV8ksadC5kr5CZsyZNqfnH+sREuJrnZguDYFa94mZMx0mM6egErVmInsrbCRibURGJWuD5yrjU2m1lN0MG6lYS42JtfN+jLFcdhd0uSOSR25MlEyeEcro0jD/W5kIo/UK3IQiY2gju5/YKEVwSlPIIRIWx7eMpD02Min0jzuKuFusm1qFfMdP0zjcSPUPtNmplLruyISVLUGse8Idd4QSV6FAmbHUurOWeVd8mce20IaRq9TWlh/26BSyOyFiQSkdSInwXM8oVDta4fXcd4155BTKaieJOWu2HSMSxDgJKO6E6gJeaDM5KWGPdcqC3OJ2jM9YrE85orNXUgFJazYncMiaqlS+8YYDJ260aThzJMcTN/jC/ND7hYpuSBmxUwL91IhgmFL9QjMiImayhC1848pevFaozbtDxRCyx/8SLgzh9KjQlJrbgLrgvX9JX8Av1FPv4bcm3LYAAAAASUVORK5CYII=";
pub const TOGGLE_ICON_B64: &str = "iVBORw0KGgoAAAANSUhEUgAAADQAAAAgCAQAAAD3NpPtAAAA6klEQVR42u3WoQrCUBSA4VNuuXFgWbNZfIClhXVBMNp8AMEXWDT5BMs+gMk0WLEJSyarVRBMA+FXmXMoBoVzF2T/C3wcDhyOtLX9FIY5KRkLAtfUmAtlK2xTVIZpipqKdsT48owlZXt96MC+ovA5UdXRho5QUnhsqOtqQzvgTsUcqCuw2tCcT61ECHShei91FwJCCga6VPRGFUwwbECf8llTldPHkADoU7ewBER4IvRIX+YbujqvOUATVOcDNfpLKnJNJRhmQC5uwntQoQgWOIu4pTIiluVELqntc0ehuAxLTEpCr33h2r7uCvsuf9qa1PgtAAAAAElFTkSuQmCC";
