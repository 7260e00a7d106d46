//! Grid geometry and the world map asset.

/// Map width in character cells. The prime meridian lands on column 35.
pub const MAP_WIDTH: i32 = 70;

/// Map height in rows. The equator lands on row 11.
pub const MAP_HEIGHT: i32 = 22;

/// Fixed UTC offset applied to API timestamps, in seconds (+01:00).
/// Not timezone-database-aware; daylight saving is ignored.
pub const UTC_OFFSET_SECS: i32 = 3600;

/// Glyph substituted into the map at the projected cell.
pub const MARKER_GLYPH: char = '#';

/// World map, 22 rows top to bottom. Rows carry a descending index starting
/// at 22 for the first row, increasing upward like latitude.
pub const WORLD_MAP: [&str; 22] = [
    r#"               ,_   .  ._. _.  .                                     "#,
    r#"           , _-\','|~\~      ~/      ;-'_   _-'     ,;_;_,    ~~-   "#,
    r#"  /~~-\_/-'~'--' \~~| ',    ,'      /  / ~|-_\_/~/~      ~~--~~~~'--_"#,
    r#"  /              ,/'-/~ '\ ,' _  , '|,'|~                   ._/-, /~ "#,
    r#"  ~/-'~\_,       '-,| '|. '   ~  ,\ /'~                /    /_  /~   "#,
    r#".-~      '|        '',\~|\       _\~     ,_  ,               /|      "#,
    r#"          '\        /'~          |_/~\\,-,~  \ "         ,_./ |   "#,
    r#"           |       /            ._-~'\_ _~|              \ ) /       "#,
    r#"            \   __-\           '/      ~ |\  \_          /  ~        "#,
    r#"  .,         '\ |,  ~-_      - |          \\_' ~|  /\  \~ ,        "#,
    r#"               ~-_'  _;       '\           '-,   \,' /\/  |          "#,
    r#"                 '\_,~'\_       \_ _,       /'    '  |, /|'          "#,
    r#"                   /     \_       ~ |      /         \  ~'; -,_.     "#,
    r#"                   |       ~\        |    |  ,        '-_, ,; ~ ~\\"#,
    r#"                    \,      /        \    / /|            ,-, ,   -, "#,
    r#"                     |    ,/          |  |' |/          ,-   ~ \   '."#,
    r#"                    ,|   ,/           \ ,/              \       |    "#,
    r#"                    /    |             ~                 -~~-, /   _ "#,
    r#"                    |  ,-'                                    ~    / "#,
    r#"                    / ,'                                      ~      "#,
    r#"                    ',|  ~                                           "#,
    r#"                      ~'                                             "#,
];
