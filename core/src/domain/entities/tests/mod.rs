mod forwarding_rule_tests;
