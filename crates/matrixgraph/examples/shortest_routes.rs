//! Shortest routes example
//!
//! Builds a small road network, walks it with DFS and BFS, then compares
//! single-source and all-pairs shortest routes.

use matrixgraph::{MatrixGraph, INFINITY};

const CITIES: [&str; 6] = ["Ashford", "Bexley", "Crawley", "Dover", "Epsom", "Farnham"];

fn main() -> matrixgraph::Result<()> {
    let mut graph = MatrixGraph::new();
    graph.set_vertex_count(CITIES.len())?;

    let roads = [
        (0, 1, 7),
        (0, 2, 9),
        (0, 5, 14),
        (1, 2, 10),
        (1, 3, 15),
        (2, 3, 11),
        (2, 5, 2),
        (3, 4, 6),
        (5, 4, 9),
    ];
    for (from, to, km) in roads {
        graph.link(from, to, km)?;
    }
    println!("✓ Added {} one-way roads between {} cities\n", graph.edge_count(), CITIES.len());

    println!("--- Traversal from {} ---\n", CITIES[0]);
    let names = |order: Vec<usize>| order.into_iter().map(|v| CITIES[v]).collect::<Vec<_>>();
    println!("DFS: {:?}", names(graph.dfs_order(0)?));
    println!("BFS: {:?}\n", names(graph.bfs_order(0)?));

    println!("--- Dijkstra from {} ---\n", CITIES[0]);
    let paths = graph.dijkstra(0)?;
    for (city, &km) in paths.distances().iter().enumerate() {
        match paths.route_to(city) {
            Some(route) => println!("{:>8}: {km:>3} km via {:?}", CITIES[city], names(route)),
            None => println!("{:>8}: unreachable", CITIES[city]),
        }
    }

    println!("\n--- Floyd-Warshall distance table ---\n");
    let all = graph.floyd()?;
    print!("{:>8}", "");
    for city in CITIES {
        print!("{:>8}", &city[..3]);
    }
    println!();
    for (from, row) in all.distances().iter().enumerate() {
        print!("{:>8}", CITIES[from]);
        for &km in row {
            if km == INFINITY {
                print!("{:>8}", "-");
            } else {
                print!("{km:>8}");
            }
        }
        println!();
    }

    Ok(())
}
