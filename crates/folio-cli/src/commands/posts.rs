use anyhow::Result;

use folio_core::content::blog;

/// Print the blog listing to stdout.
pub fn run(category: &str) -> Result<()> {
    let posts = blog::by_category(category);
    if posts.is_empty() {
        println!("No posts in category {}", category);
        return Ok(());
    }

    for post in posts {
        let star = if post.featured { "★" } else { " " };
        println!(
            "{} {}  [{} · {} min · {}]",
            star, post.title, post.date, post.read_minutes, post.category
        );
        println!("    {}", post.excerpt);
        println!();
    }

    Ok(())
}
