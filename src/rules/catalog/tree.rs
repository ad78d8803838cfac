use super::{MULTI_TEST, NULL_ROOT_GUARD, RE, WA};
use crate::core::Confidence::{High, Low, Medium};
use crate::rules::predicate::{absent, all, matches, signal, Signal};
use crate::rules::{DefectKind, Rule, Topic};

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new("TREE_MISSING_NULL_BASE", Topic::Tree, DefectKind::MissingBaseCase)
            .when(
                100,
                RE,
                all([
                    signal(Signal::Recursion),
                    matches("tree|node|left|right"),
                    absent(NULL_ROOT_GUARD),
                ]),
            )
            .explain(
                High,
                "Recursive tree traversal missing base case for null node.",
                "Add `if (root == null) return ...`",
            )
            .topics(["Tree Recursion"])
            .problems(["Binary Tree Traversal"]),
        Rule::new("TREE_NULL_ROOT_NOT_HANDLED", Topic::Tree, DefectKind::MissingEdgeCase)
            .when(100, WA, all([matches("tree|node"), absent(NULL_ROOT_GUARD)]))
            .explain(High, "Null root edge case not handled.", "Add check for null root.")
            .topics(["Edge Cases"])
            .problems(["Same Tree"]),
        Rule::new("TREE_WRONG_TRAVERSAL_ORDER", Topic::Tree, DefectKind::WrongTraversal)
            .when(95, WA, matches("preorder|postorder|inorder"))
            .explain(Medium, "Incorrect traversal order used.", "Verify required traversal order.")
            .topics(["Tree Traversals"])
            .problems(["Validate BST"]),
        Rule::new("TREE_LEVEL_ORDER_ERROR", Topic::Tree, DefectKind::WrongTraversal)
            .when(
                95,
                WA,
                all([matches("queue"), matches("(?i)level|depth"), absent(r"size\(\)")]),
            )
            .explain(
                Medium,
                "Levels not separated in level order traversal.",
                "Use queue size to separate levels.",
            )
            .topics(["Level Order Traversal"])
            .problems(["Binary Tree Level Order Traversal"]),
        Rule::new("TREE_ROOT_VALUE_IGNORED", Topic::Tree, DefectKind::WrongTransition)
            .when(90, WA, all([matches("left|right"), absent("root->val|node->val")]))
            .explain(
                Medium,
                "Root value not included in computation.",
                "Include root->val or node->val in calculation.",
            )
            .topics(["Tree Aggregation"])
            .problems(["Path Sum"]),
        Rule::new("TREE_WRONG_TRAVERSAL_METHOD", Topic::Tree, DefectKind::WrongTraversal)
            .when(90, WA, all([matches("queue"), matches("dfs|recursive")]))
            .explain(
                Medium,
                "DFS/BFS confusion in tree traversal.",
                "Choose BFS or DFS as per problem requirement.",
            )
            .topics(["DFS vs BFS"])
            .problems(["Lowest Common Ancestor"]),
        Rule::new("TREE_HEIGHT_DEPTH_ERROR", Topic::Tree, DefectKind::OffByOne)
            .when(90, WA, all([matches("height|depth"), absent(r"\+\s*1")]))
            .explain(
                Medium,
                "Height/depth calculation missing +1 for current node.",
                "Add +1 for current node.",
            )
            .topics(["Tree Height"])
            .problems(["Diameter of Binary Tree"]),
        Rule::new("TREE_LEAF_CONDITION_WRONG", Topic::Tree, DefectKind::MissingEdgeCase)
            .when(
                85,
                WA,
                all([
                    matches("leaf"),
                    absent(r"left\s*==\s*(?:null|NULL|nullptr)\s*&&[^;{]*right\s*==\s*(?:null|NULL|nullptr)"),
                ]),
            )
            .explain(
                Low,
                "Incorrect leaf node condition.",
                "Check both left and right child are null.",
            )
            .topics(["Leaf Nodes"])
            .problems(["Sum of Left Leaves"]),
        Rule::new("TREE_NOT_RESET", Topic::Tree, DefectKind::NotReset)
            .when(80, WA, all([matches(MULTI_TEST), matches("tree|node")]))
            .explain(
                Low,
                "Tree data not reset between test cases.",
                "Rebuild tree for each test case.",
            )
            .topics(["Multiple Test Cases"])
            .problems(["Binary Tree Construction"]),
    ]
}
