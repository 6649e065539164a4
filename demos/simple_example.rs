use undirected_sssp::graph::{Graph, MutableGraph};
use undirected_sssp::{Dijkstra, ShortestPathAlgorithm, UndirectedGraph};

fn main() {
    // Create a small undirected graph with 5 vertices
    let mut graph: UndirectedGraph<u32> = UndirectedGraph::new(5);

    // Add edges with weights
    graph.add_edge(0, 1, 10).unwrap();
    graph.add_edge(0, 2, 5).unwrap();
    graph.add_edge(1, 2, 3).unwrap();
    graph.add_edge(1, 3, 1).unwrap();
    graph.add_edge(2, 3, 9).unwrap();
    graph.add_edge(2, 4, 2).unwrap();
    graph.add_edge(3, 4, 4).unwrap();

    // Source vertex
    let source = 0;

    println!("--- Testing on a simple graph ---");
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());
    print!("{}", graph);

    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, source).unwrap();

    println!("\n{} algorithm results:", <Dijkstra as ShortestPathAlgorithm<u32, UndirectedGraph<u32>>>::name(&dijkstra));
    for v in 0..graph.vertex_count() {
        if let Some(dist) = result.distances[v] {
            let path = <Dijkstra as ShortestPathAlgorithm<u32, UndirectedGraph<u32>>>::get_path(&dijkstra, &result, v).unwrap();
            println!("Vertex {}: distance = {}, path = {:?}", v, dist, path);
        } else {
            println!("Vertex {}: unreachable", v);
        }
    }
}
