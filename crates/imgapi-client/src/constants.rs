// Endpoint path constants and client defaults

/// Version of this client wrapper
pub const VERSION: &str = "1.0.0";

/// Host used when none is configured
pub const DEFAULT_HOST: &str = "localhost";

/// Port used when none is configured
pub const DEFAULT_PORT: u16 = 3030;

pub mod api_path {
    // Service
    pub const PING: &str = "/ping";
    pub const STATS: &str = "/stats";

    // Single avatar
    pub const RELIGION: &str = "/religion";
    pub const BEAUTIFUL: &str = "/beautiful";
    pub const FEAR: &str = "/fear";
    pub const SACRED: &str = "/sacred";
    pub const PAINTING: &str = "/painting";
    pub const DELETE: &str = "/delete";
    pub const GARBAGE: &str = "/garbage";
    pub const TOM: &str = "/tom";
    pub const PICTURE: &str = "/picture";
    pub const TRUTH: &str = "/truth";
    pub const MASK: &str = "/mask";

    // Color / text only
    pub const COLOR: &str = "/color";
    pub const DIPSHIT: &str = "/dipshit";
    pub const TWEET: &str = "/tweet";

    // Avatar + target
    pub const BED: &str = "/bed";
    pub const CRUSH: &str = "/crush";

    // Avatar + text
    pub const FATHER: &str = "/father";
    pub const ACHIEVEMENT: &str = "/achievement";
}

pub mod query_param {
    pub const AVATAR: &str = "avatar";
    pub const TARGET: &str = "target";
    pub const TEXT: &str = "text";
    pub const COLOR: &str = "color";
    pub const NO_STATS: &str = "noStats";
}
