pub trait MessageProducer {
    fn produce(&self) -> String;
}

pub type BoxMessageProducer = Box<dyn MessageProducer + Send + Sync>;

pub struct HelloWorldMessage {

}

impl HelloWorldMessage {
    pub fn new() -> Box<HelloWorldMessage> {
        Box::new(HelloWorldMessage { })
    }
}

impl MessageProducer for HelloWorldMessage {
    fn produce(&self) -> String {
        "Hello, World!".to_owned()
    }
}

#[test]
fn test_hello_world_message1() {
    assert_eq!("Hello, World!", HelloWorldMessage::new().produce());
}

#[test]
fn test_hello_world_message_repeated() {
    let producer = HelloWorldMessage::new();

    let first = producer.produce();
    let second = producer.produce();
    assert_eq!(first, second);
    assert_eq!("Hello, World!", second);
}
