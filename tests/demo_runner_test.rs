use pattern_demos::{
    build_chain, chain_depth, observer_for, Component, ConcreteComponent, ConcreteDecoratorA,
    ConcreteDecoratorB, DecoratorKind, Demo, DemoConfig, DemoRunner, Logistics, ObserverKind,
    RoadLogistics, SeaLogistics, Subject,
};

fn lines(out: Vec<u8>) -> Vec<String> {
    String::from_utf8(out)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_stock_scenario_output() {
    let mut out = Vec::new();
    DemoRunner::new(DemoConfig::default()).run(&mut out).unwrap();

    assert_eq!(
        lines(out),
        vec![
            "Delivering by truck",
            "Delivering by ship",
            "ConcreteComponent.Operation()",
            "ConcreteDecoratorB.Operation()",
            "ConcreteDecoratorA.Operation()",
            "ConcreteObserverA.Update()",
            "ConcreteObserverB.Update()",
            "ConcreteObserverA.Update()",
        ]
    );
}

#[test]
fn test_stock_scenario_is_deterministic() {
    let mut first = Vec::new();
    let mut second = Vec::new();
    DemoRunner::new(DemoConfig::default()).run(&mut first).unwrap();
    DemoRunner::new(DemoConfig::default()).run(&mut second).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_plan_delivery_per_logistics() {
    let mut road = Vec::new();
    RoadLogistics.plan_delivery(&mut road).unwrap();
    assert_eq!(lines(road), vec!["Delivering by truck"]);

    let mut sea = Vec::new();
    SeaLogistics.plan_delivery(&mut sea).unwrap();
    assert_eq!(lines(sea), vec!["Delivering by ship"]);
}

#[test]
fn test_hand_built_chain_matches_built_chain() {
    let by_hand: Box<dyn Component> = Box::new(ConcreteDecoratorA::new(Box::new(
        ConcreteDecoratorB::new(Box::new(ConcreteComponent)),
    )));
    let built = build_chain(&[DecoratorKind::A, DecoratorKind::B]);

    let mut a = Vec::new();
    let mut b = Vec::new();
    by_hand.operation(&mut a).unwrap();
    built.operation(&mut b).unwrap();

    assert_eq!(a, b);
    assert_eq!(chain_depth(by_hand.as_ref()), 3);
}

#[test]
fn test_subject_attach_notify_detach() {
    let mut subject = Subject::new();
    let a = observer_for(ObserverKind::A);
    let b = observer_for(ObserverKind::B);
    subject.attach(a.clone());
    subject.attach(b.clone());

    let mut both = Vec::new();
    subject.notify(&mut both).unwrap();
    assert_eq!(
        lines(both),
        vec!["ConcreteObserverA.Update()", "ConcreteObserverB.Update()"]
    );

    subject.detach(&b);
    let mut only_a = Vec::new();
    subject.notify(&mut only_a).unwrap();
    assert_eq!(lines(only_a), vec!["ConcreteObserverA.Update()"]);
    assert_eq!(subject.observer_names(), vec!["ConcreteObserverA"]);
}

#[test]
fn test_single_demo_selection() {
    let config = DemoConfig {
        demos: vec![Demo::Observer],
        ..DemoConfig::default()
    };

    let mut out = Vec::new();
    DemoRunner::new(config).run(&mut out).unwrap();

    assert_eq!(
        lines(out),
        vec![
            "ConcreteObserverA.Update()",
            "ConcreteObserverB.Update()",
            "ConcreteObserverA.Update()",
        ]
    );
}
