use crate::cli::SlugArgs;
use crate::services::slug;

pub fn run(args: SlugArgs) {
    let slug = match (args.suffix, args.random) {
        (Some(suffix), _) => slug::with_suffix(&args.text, suffix),
        (None, true) => slug::with_random_suffix(&args.text),
        (None, false) => slug::normalize(&args.text),
    };

    if slug.is_empty() {
        tracing::warn!("'{}' has no characters usable in a slug", args.text);
    }
    println!("{}", slug);
}
