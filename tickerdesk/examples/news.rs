use tickerdesk_news::NewsFinder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let phrase = std::env::args().nth(1).unwrap_or_else(|| "Infosys".to_string());
    let finder = NewsFinder::new_default()?;
    let links = finder.find_news(&phrase, 6, 5).await?;
    println!("{} links for '{phrase}'", links.len());
    for link in links {
        println!("  {link}");
    }
    Ok(())
}
