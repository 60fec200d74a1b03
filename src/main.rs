reexport!(testing, test);
reexport!(error);
reexport!(config);
reexport!(reader);
reexport!(lexer);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

use itertools::Itertools as _;
use tracing_subscriber::EnvFilter;

fn main() -> Result {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let raw = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => std::io::read_to_string(std::io::stdin())?,
    };

    let query = Query::from(raw.as_str());
    let query = if config().strict_dispatch {
        tokenise_strict(query)?
    } else {
        tokenise(query)?
    };

    for line in &query.lines {
        println!("{:>4} | {}", line.num, line.tokens.iter().join(" "));
    }

    Ok(())
}

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
