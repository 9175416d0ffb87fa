use super::*;
use crate::graph::sample::sample_graph;
use crate::graph::Graph;

fn s(id: &str) -> String {
    id.to_string()
}

fn entry(cost: f64, seq: u64) -> HeapEntry<&'static str> {
    HeapEntry {
        node_id: "n",
        accumulated_cost: Weight::new(cost),
        seq,
    }
}

fn unit_sample_graph() -> Graph<String> {
    let mut graph = Graph::new();
    for node in sample_graph().nodes() {
        graph.add_node(node.clone());
    }
    let weighted = sample_graph();
    for from in weighted.nodes() {
        for edge in weighted.edges(from) {
            graph.add_edge(from.clone(), edge.to.clone(), 1);
        }
    }
    graph
}

#[test]
fn test_heap_entry_ordering() {
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(entry(5.0, 0)));
    heap.push(Reverse(entry(1.5, 1)));
    heap.push(Reverse(entry(3.0, 2)));

    let costs: Vec<f64> = std::iter::from_fn(|| heap.pop())
        .map(|Reverse(e)| e.accumulated_cost.value())
        .collect();
    assert_eq!(costs, vec![1.5, 3.0, 5.0]);
}

#[test]
fn test_heap_entry_ties_pop_in_push_order() {
    assert!(entry(2.0, 0) < entry(2.0, 1));
    assert!(entry(1.0, 9) < entry(2.0, 0));
}

#[test]
fn test_sample_graph_a_to_f() {
    let graph = sample_graph();
    let (outcome, trace) = bidirectional_dijkstra(&graph, &s("A"), &s("F"), None).unwrap();

    let found = outcome.found().unwrap();
    assert_eq!(found.nodes, vec![s("A"), s("C"), s("F")]);
    assert_eq!(found.total_weight, Weight::from(7));
    assert_eq!(found.hops, 2);
    assert_eq!(trace.meeting, Some(s("C")));
    assert!(!trace.truncated);
}

#[test]
fn test_sample_graph_a_to_e_prefers_lighter_route() {
    let graph = sample_graph();
    let (outcome, _) = bidirectional_dijkstra(&graph, &s("A"), &s("E"), None).unwrap();

    let found = outcome.found().unwrap();
    assert_eq!(found.nodes, vec![s("A"), s("B"), s("E")]);
    assert_eq!(found.total_weight, Weight::from(7));
}

#[test]
fn test_sample_graph_f_to_d_weight() {
    // F-C-A-B-D and F-E-B-D both weigh 10
    let graph = sample_graph();
    let (outcome, _) = bidirectional_dijkstra(&graph, &s("F"), &s("D"), None).unwrap();

    assert_eq!(outcome.found().unwrap().total_weight, Weight::from(10));
}

#[test]
fn test_unit_weights_give_fewest_hops() {
    let graph = unit_sample_graph();
    let (outcome, _) = bidirectional_dijkstra(&graph, &s("F"), &s("D"), None).unwrap();

    let found = outcome.found().unwrap();
    assert_eq!(found.nodes, vec![s("F"), s("E"), s("B"), s("D")]);
    assert_eq!(found.hops, 3);
    assert_eq!(found.total_weight, Weight::from(3));
}

#[test]
fn test_directed_graph_uses_inbound_edges_backward() {
    let mut graph: Graph<&str> = Graph::new();
    graph.add_edge("A", "B", 1);
    graph.add_edge("B", "C", 1);

    let (outcome, _) = bidirectional_dijkstra(&graph, &"A", &"C", None).unwrap();
    assert_eq!(outcome.path(), Some(&["A", "B", "C"][..]));

    let (outcome, _) = bidirectional_dijkstra(&graph, &"C", &"A", None).unwrap();
    assert_eq!(outcome, SearchOutcome::NotFound);
}

#[test]
fn test_start_equals_goal() {
    let graph = sample_graph();
    let (outcome, trace) = bidirectional_dijkstra(&graph, &s("B"), &s("B"), None).unwrap();

    assert_eq!(outcome.path(), Some(&[s("B")][..]));
    assert_eq!(outcome.found().unwrap().total_weight, Weight::ZERO);
    assert_eq!(trace.expansions, 0);
}

#[test]
fn test_unreachable_goal() {
    let mut graph: Graph<&str> = Graph::new();
    graph.add_undirected_edge("A", "B", 1);
    graph.add_undirected_edge("C", "D", 1);

    let (outcome, _) = bidirectional_dijkstra(&graph, &"A", &"D", None).unwrap();
    assert_eq!(outcome, SearchOutcome::NotFound);
}

#[test]
fn test_negative_weight_is_rejected() {
    let mut graph: Graph<&str> = Graph::new();
    graph.add_edge("A", "B", -1);
    graph.add_edge("B", "C", 1);

    let err = bidirectional_dijkstra(&graph, &"A", &"C", None).unwrap_err();
    match err {
        BisearchError::NegativeWeight { from, to, weight } => {
            assert_eq!(from, "A");
            assert_eq!(to, "B");
            assert_eq!(weight, -1.0);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_expansion_budget_reports_not_found() {
    let graph = sample_graph();
    let (outcome, trace) = bidirectional_dijkstra(&graph, &s("A"), &s("F"), Some(1)).unwrap();

    assert_eq!(outcome, SearchOutcome::NotFound);
    assert!(trace.truncated);
    assert_eq!(trace.expansions, 1);
    assert_eq!(
        trace.truncation_reason.as_deref(),
        Some(TRUNCATION_MAX_EXPANSIONS)
    );
}

#[test]
fn test_long_chain_weighted() {
    let mut graph: Graph<u32> = Graph::new();
    for i in 0..20_000 {
        graph.add_undirected_edge(i, i + 1, 1);
    }

    let (outcome, _) = bidirectional_dijkstra(&graph, &0, &20_000, None).unwrap();
    let found = outcome.found().unwrap();
    assert_eq!(found.hops, 20_000);
    assert_eq!(found.total_weight, Weight::from(20_000));
}

mod randomized {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Plain single-source Dijkstra over outbound edges
    fn reference_distance(graph: &Graph<u32>, start: u32, goal: u32) -> Option<f64> {
        let mut best: HashMap<u32, f64> = HashMap::from([(start, 0.0)]);
        let mut settled = HashSet::new();
        let mut heap = BinaryHeap::new();
        let mut seq = 0;
        heap.push(Reverse(HeapEntry {
            node_id: start,
            accumulated_cost: Weight::ZERO,
            seq,
        }));

        while let Some(Reverse(entry)) = heap.pop() {
            if !settled.insert(entry.node_id) {
                continue;
            }
            if entry.node_id == goal {
                return Some(entry.accumulated_cost.value());
            }
            for edge in graph.edges(&entry.node_id) {
                let cost = entry.accumulated_cost.value() + edge.weight.value();
                if best.get(&edge.to).is_none_or(|&known| cost < known) {
                    best.insert(edge.to, cost);
                    seq += 1;
                    heap.push(Reverse(HeapEntry {
                        node_id: edge.to,
                        accumulated_cost: Weight::new(cost),
                        seq,
                    }));
                }
            }
        }
        None
    }

    /// Lightest directed edge `from -> to`
    fn edge_weight(graph: &Graph<u32>, from: u32, to: u32) -> Option<f64> {
        graph
            .edges(&from)
            .iter()
            .filter(|e| e.to == to)
            .map(|e| e.weight.value())
            .reduce(f64::min)
    }

    fn random_graph(rng: &mut StdRng, undirected: bool) -> Graph<u32> {
        let nodes = rng.random_range(2..12u32);
        let edges = rng.random_range(0..nodes * 3);
        let mut graph = Graph::new();
        for id in 0..nodes {
            graph.add_node(id);
        }
        for _ in 0..edges {
            let from = rng.random_range(0..nodes);
            let to = rng.random_range(0..nodes);
            let weight = rng.random_range(1..10u32);
            if undirected {
                graph.add_undirected_edge(from, to, weight);
            } else {
                graph.add_edge(from, to, weight);
            }
        }
        graph
    }

    #[test]
    fn test_matches_single_source_dijkstra() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for round in 0..1_000 {
            let graph = random_graph(&mut rng, round % 2 == 0);
            let count = graph.node_count() as u32;
            let start = rng.random_range(0..count);
            let goal = rng.random_range(0..count);

            let (outcome, _) = bidirectional_dijkstra(&graph, &start, &goal, None).unwrap();
            let expected = reference_distance(&graph, start, goal);

            match (outcome.found(), expected) {
                (Some(found), Some(distance)) => {
                    assert_eq!(
                        found.total_weight.value(),
                        distance,
                        "round {round}: {start} -> {goal}"
                    );
                    assert_eq!(found.nodes.first(), Some(&start));
                    assert_eq!(found.nodes.last(), Some(&goal));
                    let walked: f64 = found
                        .nodes
                        .windows(2)
                        .map(|pair| edge_weight(&graph, pair[0], pair[1]).unwrap())
                        .sum();
                    assert_eq!(walked, distance, "round {round}: path weight");
                }
                (None, None) => {}
                (found, expected) => panic!(
                    "round {round}: {start} -> {goal} found {:?}, expected {:?}",
                    found.map(|f| &f.nodes),
                    expected
                ),
            }
        }
    }
}
