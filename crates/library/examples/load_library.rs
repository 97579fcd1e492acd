use library::MovieLibrary;
use std::path::Path;
use std::time::Instant;

fn main() {
    let path = Path::new("data/movies.json");

    println!("Loading movie library...\n");

    let start = Instant::now();
    let library = MovieLibrary::load_from_file(path)
        .expect("Failed to load library");
    let elapsed = start.elapsed();

    let (movies, watched, offline) = library.counts();

    println!("\n=== Load Complete ===");
    println!("Time taken: {:?}", elapsed);
    println!("Movies: {}", movies);
    println!("Watched: {}", watched);
    println!("Offline: {}", offline);
    for movie in library.movies() {
        println!("  {:<30} sorts as {}", movie.title, movie.title_sortable());
    }
}
