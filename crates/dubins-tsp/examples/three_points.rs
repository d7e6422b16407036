//! Three sites around the origin, radius 1: prints the greedy tour and each
//! leg's Dubins word.

use dubins_tsp::prelude::*;

fn main() -> Result<()> {
    let nodes = vec![
        Node::new("east", Configuration::new(10.0, 0.0, 0.0)),
        Node::new("north", Configuration::new(0.0, 10.0, 0.0)),
        Node::new("west", Configuration::new(-10.0, 0.0, 0.0)),
    ];
    let home = Configuration::origin();
    let tour = build_tour(&nodes, &home, &home, 1.0)?;

    let mut prev = home;
    for stop in &tour.stops {
        let path = shortest_path(&prev, &stop.configuration, 1.0);
        println!("{:>6} via {} ({:.6})", stop.id, path.word(), path.length());
        prev = stop.configuration;
    }
    let back = shortest_path(&prev, &home, 1.0);
    println!("{:>6} via {} ({:.6})", "home", back.word(), back.length());
    println!("Tour: {} (cost {:.6})", tour.render(), tour.total_cost);
    Ok(())
}
