use clap::{
    builder::{
        styling::{AnsiColor, Effects, Styles},
        ValueParser,
    },
    Arg, ColorChoice, Command,
};

pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            // Successfully parsed as a number
            if parsed <= 5 {
                return Ok(parsed);
            }
        }

        match level.to_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(4),
            _ => Err("invalid log level".to_string()),
        }
    })
}

pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    Command::new("slosilo")
        .about("Credential Administration")
        .version(env!("CARGO_PKG_VERSION"))
        .color(ColorChoice::Auto)
        .styles(styles)
        .arg(
            Arg::new("port")
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("8080")
                .env("SLOSILO_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new("authority-url")
                .long("authority-url")
                .help("Identity authority base URL, example: https://authority.tld:9200")
                .env("SLOSILO_AUTHORITY_URL")
                .required(true),
        )
        .arg(
            Arg::new("authority-token")
                .long("authority-token")
                .help("Admin token used when calling the identity authority")
                .env("SLOSILO_AUTHORITY_TOKEN")
                .required(true),
        )
        .arg(
            Arg::new("admin-scope")
                .long("admin-scope")
                .help("When set, callers must carry this scope in x-auth-request-groups to use the credential endpoints")
                .env("SLOSILO_ADMIN_SCOPE"),
        )
        .arg(
            Arg::new("verbosity")
                .short('v')
                .long("verbose")
                .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
                .env("SLOSILO_LOG_LEVEL")
                .global(true)
                .action(clap::ArgAction::Count)
                .value_parser(validator_log_level()),
        )
}
