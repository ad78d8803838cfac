use super::{MULTI_TEST, TLE, WA};
use crate::core::Confidence::{High, Low, Medium};
use crate::rules::predicate::{absent, all, matches};
use crate::rules::{DefectKind, Rule, Topic};

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new("GRAPH_NO_VISITED", Topic::Graph, DefectKind::MissingVisited)
            .when(
                100,
                TLE,
                all([matches("(?i)graph|adj"), matches("(?i)dfs|bfs"), absent("visited|vis")]),
            )
            .explain(
                High,
                "Graph traversal without visited array causes infinite revisits.",
                "Maintain a visited array and mark nodes.",
            )
            .topics(["DFS", "BFS"])
            .problems(["Number of Islands"]),
        Rule::new("GRAPH_DFS_FOR_SHORTEST_PATH", Topic::Graph, DefectKind::WrongTraversal)
            .when(100, WA, all([matches("(?i)dfs"), matches("(?i)shortest|min path|distance")]))
            .explain(High, "DFS does not guarantee shortest path.", "Use BFS for unweighted graphs.")
            .topics(["BFS"])
            .problems(["Shortest Path in Binary Matrix"]),
        Rule::new("GRAPH_DIJKSTRA_NO_PQ", Topic::Graph, DefectKind::WrongApproach)
            .when(100, WA, all([matches("(?i)dijkstra"), absent("priority_queue")]))
            .explain(
                High,
                "Dijkstra without priority queue is incorrect.",
                "Use min-heap (priority queue).",
            )
            .topics(["Dijkstra"])
            .problems(["Network Delay Time"]),
        Rule::new("GRAPH_NEGATIVE_WEIGHT_DIJKSTRA", Topic::Graph, DefectKind::WrongApproach)
            .when(100, WA, all([matches("(?i)dijkstra"), matches("-")]))
            .explain(
                High,
                "Dijkstra does not work with negative weights.",
                "Use Bellman-Ford algorithm.",
            )
            .topics(["Bellman-Ford"])
            .problems(["Cheapest Flights Within K Stops"]),
        Rule::new("GRAPH_DIRECTED_CYCLE_WRONG", Topic::Graph, DefectKind::WrongTraversal)
            .when(
                100,
                WA,
                all([matches("(?i)directed"), matches("(?i)dfs"), absent("recStack|pathVis")]),
            )
            .explain(
                High,
                "Directed cycle detection needs recursion stack.",
                "Maintain recursion stack or path visited.",
            )
            .topics(["Directed Graphs"])
            .problems(["Course Schedule"]),
        Rule::new("GRAPH_VISITED_MARK_LATE", Topic::Graph, DefectKind::MissingVisited)
            .when(95, TLE, all([matches("queue|stack"), matches("visited"), matches("pop")]))
            .explain(
                High,
                "Visited marked after pop allows duplicates.",
                "Mark visited when pushing into queue/stack.",
            )
            .topics(["BFS Optimization"])
            .problems(["Shortest Path in Grid"]),
        Rule::new("GRAPH_CYCLE_PARENT_MISSING", Topic::Graph, DefectKind::WrongTraversal)
            .when(
                95,
                WA,
                all([matches("(?i)undirected"), matches("(?i)dfs"), absent("parent")]),
            )
            .explain(
                Medium,
                "Undirected cycle detection missing parent tracking.",
                "Track parent in DFS.",
            )
            .topics(["Cycle Detection"])
            .problems(["Detect Cycle in Undirected Graph"]),
        Rule::new("GRAPH_DAG_NO_TOPO", Topic::Graph, DefectKind::WrongApproach)
            .when(95, WA, all([matches("(?i)dag"), absent("topo|topological")]))
            .explain(
                Medium,
                "DAG problems require topological ordering.",
                "Use topological sort.",
            )
            .topics(["Topological Sort"])
            .problems(["Longest Path in DAG"]),
        Rule::new("GRAPH_DP_BASE_MISSING", Topic::Graph, DefectKind::MissingBaseCase)
            .when(
                90,
                WA,
                all([matches("graph|adj"), matches(r"\bdp\[\s*u\s*\]"), absent(r"dp\[\s*start\s*\]")]),
            )
            .explain(
                Medium,
                "Graph DP missing start node initialization.",
                "Initialize dp[start].",
            )
            .topics(["Graph DP"])
            .problems(["Longest Path in DAG"]),
        Rule::new("GRAPH_ADJ_NOT_RESET", Topic::Graph, DefectKind::NotReset)
            .when(80, WA, all([matches(MULTI_TEST), matches("adj"), absent("clear")]))
            .explain(
                Low,
                "Adjacency list not reset between test cases.",
                "Clear adjacency list before each test case.",
            )
            .topics(["Multiple Test Cases"])
            .problems(["Graph Construction"]),
    ]
}
