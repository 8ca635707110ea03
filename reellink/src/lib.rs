// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Re-export the pure helpers used by the binary and the tests
pub use handlers::{
    Flow, PlayCommand, PlaySession, format_actor, format_cast_member, format_path_summary,
    format_search_result, parse_id, parse_play_command,
};

pub fn print_banner() {
    let banner = r#"
    ╔══════════════════════════════════════════════╗
    ║   ██████╗ ███████╗███████╗██╗     ██╗        ║
    ║   ██╔══██╗██╔════╝██╔════╝██║     ██║        ║
    ║   ██████╔╝█████╗  █████╗  ██║     ██║        ║
    ║   ██╔══██╗██╔══╝  ██╔══╝  ██║     ██║        ║
    ║   ██║  ██║███████╗███████╗███████╗███████╗   ║
    ║   ╚═╝  ╚═╝╚══════╝╚══════╝╚══════╝╚══════╝   ║
    ║                                              ║
    ║      🎬 Connect two actors through film 🎬   ║
    ╚══════════════════════════════════════════════╝
"#;
    eprintln!("{}", banner);
}
