mod tests {
    use myrtio_dispatcher::{QueueFull, RequestQueue, StateControl, StateDispatcher};

    const IDLE: u8 = 0;

    fn noop() {}

    #[test]
    fn test_requests_come_out_in_order() {
        let queue: RequestQueue<u8, 3> = RequestQueue::new();
        let sender = queue.sender();
        assert_eq!(sender.try_post(1), Ok(()));
        assert_eq!(sender.try_post(2), Ok(()));
        assert_eq!(sender.try_post(3), Ok(()));
        assert_eq!(queue.len(), 3);

        let receiver = queue.receiver();
        assert_eq!(receiver.try_take(), Some(1));
        assert_eq!(receiver.try_take(), Some(2));
        assert_eq!(receiver.try_take(), Some(3));
        assert_eq!(receiver.try_take(), None);
    }

    #[test]
    fn test_full_queue_returns_request() {
        let queue: RequestQueue<u8, 1> = RequestQueue::new();
        assert_eq!(queue.try_post(1), Ok(()));
        assert_eq!(queue.try_post(2), Err(QueueFull(2)));
        assert_eq!(queue.try_take(), Some(1));
    }

    #[test]
    fn test_forward_makes_request_pending() {
        let control = StateControl::new(IDLE);
        let queue: RequestQueue<u8, 2> = RequestQueue::new();
        assert_eq!(queue.forward_to(&control), None);

        assert_eq!(queue.try_post(5), Ok(()));
        assert_eq!(queue.forward_to(&control), Some(5));
        assert_eq!(control.pending_state(), 5);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_forward_waits_while_busy() {
        let control = StateControl::new(IDLE);
        let queue: RequestQueue<u8, 2> = RequestQueue::new();
        let mut dispatcher: StateDispatcher<'_, u8, fn(), 4> =
            StateDispatcher::new(&control, noop as fn());
        assert!(dispatcher.register(1, noop).is_ok());

        assert!(control.request_transition(1));
        dispatcher.step();
        assert!(!control.is_idle());

        assert_eq!(queue.try_post(2), Ok(()));
        assert_eq!(queue.receiver().forward_to(&control), None);
        assert_eq!(queue.len(), 1);

        dispatcher.step();
        assert!(control.is_idle());
        assert_eq!(queue.receiver().forward_to(&control), Some(2));
    }
}
