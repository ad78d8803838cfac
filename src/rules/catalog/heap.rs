use super::{MULTI_TEST, RE, WA};
use crate::core::Confidence::{High, Low, Medium};
use crate::rules::predicate::{absent, all, matches};
use crate::rules::{DefectKind, Rule, Topic};

pub fn rules() -> Vec<Rule> {
    vec![
        Rule::new("HEAP_WRONG_TYPE", Topic::Heap, DefectKind::WrongComparator)
            .when(
                100,
                WA,
                all([matches("priority_queue"), matches("(?i)min|max|smallest|largest")]),
            )
            .explain(
                High,
                "Incorrect heap type used (min-heap vs max-heap).",
                "Use correct heap type as per problem requirement.",
            )
            .topics(["Min Heap vs Max Heap"])
            .problems(["Merge K Sorted Lists", "Kth Largest Element"]),
        Rule::new("HEAP_EMPTY_ACCESS", Topic::Heap, DefectKind::EmptyAccess)
            .when(
                100,
                RE,
                all([
                    matches("priority_queue|heap"),
                    matches(r"top\(\)|pop\(\)"),
                    absent(r"empty\(\)"),
                ]),
            )
            .explain(High, "Heap accessed while empty.", "Check empty() before pop() or top().")
            .topics(["Heap Safety"])
            .problems(["Min Stack"]),
        Rule::new("HEAP_WRONG_COMPARATOR", Topic::Heap, DefectKind::WrongComparator)
            .when(95, WA, all([matches("priority_queue"), matches("compare|cmp|lambda")]))
            .explain(
                Medium,
                "Incorrect comparator logic in heap.",
                "Verify comparator ordering logic.",
            )
            .topics(["Custom Comparator"])
            .problems(["K Closest Points"]),
        Rule::new("HEAP_POP_ORDER_CONFUSION", Topic::Heap, DefectKind::WrongApproach)
            .when(
                90,
                WA,
                all([matches("priority_queue|heap"), matches("pop"), matches("(?i)min|max")]),
            )
            .explain(
                Medium,
                "Incorrect assumption about heap pop order.",
                "Remember heap guarantees only top element.",
            )
            .topics(["Heap Properties"])
            .problems(["Last Stone Weight"]),
        Rule::new("HEAP_WRONG_PUSH_VALUE", Topic::Heap, DefectKind::WrongKey)
            .when(85, WA, all([matches("priority_queue|heap"), matches(r"push\(\s*i\s*\)")]))
            .explain(
                Medium,
                "Incorrect value pushed into heap.",
                "Verify correct value is pushed.",
            )
            .topics(["Heap Logic"])
            .problems(["Find K Closest Elements"]),
        Rule::new("HEAP_NOT_RESET", Topic::Heap, DefectKind::NotReset)
            .when(
                80,
                WA,
                all([matches(MULTI_TEST), matches("priority_queue|heap"), absent("clear")]),
            )
            .explain(
                Low,
                "Heap not cleared between test cases.",
                "Reinitialize heap per test case.",
            )
            .topics(["Multiple Test Cases"])
            .problems(["Kth Largest Element"]),
        Rule::new("HEAP_INSTEAD_OF_DEQUE", Topic::Heap, DefectKind::WrongApproach)
            .when(75, WA, all([matches("priority_queue|heap"), matches("(?i)sliding window")]))
            .explain(
                Low,
                "Heap is inefficient for sliding window problems.",
                "Use deque for optimal sliding window solution.",
            )
            .topics(["Sliding Window"])
            .problems(["Sliding Window Maximum"]),
    ]
}
