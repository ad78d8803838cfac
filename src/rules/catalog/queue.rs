use super::{MULTI_TEST, RE, TLE, WA};
use crate::core::Confidence::{High, Low, Medium};
use crate::rules::predicate::{absent, all, matches};
use crate::rules::{DefectKind, Rule, Topic};

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new("QUEUE_EMPTY_ACCESS", Topic::Queue, DefectKind::EmptyAccess)
            .when(
                100,
                RE,
                all([matches("queue"), matches(r"front\(\)|pop\(\)"), absent(r"empty\(\)")]),
            )
            .explain(
                High,
                "Queue accessed without checking if empty.",
                "Check queue.empty() before front() or pop().",
            )
            .topics(["Queue Safety"])
            .problems(["Implement Queue"]),
        Rule::new("QUEUE_INFINITE_LOOP", Topic::Queue, DefectKind::InfiniteLoop)
            .when(100, RE, all([matches("while"), matches("queue"), absent(r"pop\(\)")]))
            .explain(
                High,
                "Queue loop without popping elements.",
                "Ensure queue.pop() is called inside loop.",
            )
            .topics(["Queue Loop Control"])
            .problems(["BFS Traversal"]),
        Rule::new("QUEUE_NO_VISITED", Topic::Queue, DefectKind::MissingVisited)
            .when(100, TLE, all([matches("(?i)queue|bfs"), absent("visited|vis")]))
            .explain(
                High,
                "BFS without visited array causes repeated traversal.",
                "Use visited array to prevent revisits.",
            )
            .topics(["BFS"])
            .problems(["Number of Islands"]),
        Rule::new("QUEUE_VISITED_MARK_LATE", Topic::Queue, DefectKind::MissingVisited)
            .when(
                95,
                TLE,
                all([matches("(?i)queue|bfs"), matches("visited"), matches(r"pop\(\)")]),
            )
            .explain(
                High,
                "Nodes marked visited after pop, causing duplicates.",
                "Mark visited when pushing to queue.",
            )
            .topics(["BFS Optimization"])
            .problems(["Shortest Path in Grid"]),
        Rule::new("QUEUE_STACK_CONFUSION", Topic::Queue, DefectKind::WrongApproach)
            .when(95, WA, all([matches("queue"), matches(r"top\(\)")]))
            .explain(
                High,
                "Queue is accessed using stack methods.",
                "Use front()/back() instead of top().",
            )
            .topics(["Queue vs Stack"])
            .problems(["Implement Stack using Queues"]),
        Rule::new("QUEUE_LEVEL_ORDER_ERROR", Topic::Queue, DefectKind::WrongTraversal)
            .when(
                95,
                WA,
                all([matches("queue"), matches("(?i)level|depth"), absent(r"size\(\)")]),
            )
            .explain(
                Medium,
                "Level order traversal without separating levels.",
                "Use queue size to process each level.",
            )
            .topics(["Level Order Traversal"])
            .problems(["Binary Tree Level Order Traversal"]),
        Rule::new("QUEUE_DFS_FOR_SHORTEST_PATH", Topic::Queue, DefectKind::WrongTraversal)
            .when(90, WA, all([matches("(?i)dfs"), matches("(?i)shortest|min path|distance")]))
            .explain(
                High,
                "DFS does not guarantee shortest path.",
                "Use BFS for shortest path in unweighted graphs.",
            )
            .topics(["BFS vs DFS"])
            .problems(["Shortest Path in Binary Matrix"]),
        Rule::new("QUEUE_NOT_RESET", Topic::Queue, DefectKind::NotReset)
            .when(80, WA, all([matches(MULTI_TEST), matches("queue"), absent(r"clear\(\)")]))
            .explain(
                Low,
                "Queue not cleared between test cases.",
                "Clear queue before each test case.",
            )
            .topics(["Multiple Test Cases"])
            .problems(["Level Order Traversal"]),
    ]
}
